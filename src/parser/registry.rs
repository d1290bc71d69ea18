//! Fixed-capacity command registry.

use heapless::{String, Vec};

use super::Handler;
use super::args::ArgType;
use super::error::RegisterError;

/// A registered command: its name, argument types and handler.
#[derive(Debug, Clone)]
pub struct Command<
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> {
    name: String<NAME_LEN>,
    arg_types: String<ARGS>,
    handler: Handler<ARG_SIZE, RESPONSE_SIZE>,
}

impl<const ARGS: usize, const NAME_LEN: usize, const ARG_SIZE: usize, const RESPONSE_SIZE: usize>
    Command<ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>
{
    /// The name matched against the first word of a command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument type string given at registration, e.g. `"ii"`.
    pub fn arg_types(&self) -> &str {
        &self.arg_types
    }

    /// The declared argument types, in order.
    pub fn types(&self) -> impl Iterator<Item = ArgType> + '_ {
        self.arg_types.bytes().filter_map(ArgType::from_tag)
    }

    /// Number of arguments the command takes.
    pub fn arity(&self) -> usize {
        self.arg_types.len()
    }

    /// The function invoked for this command.
    pub fn handler(&self) -> Handler<ARG_SIZE, RESPONSE_SIZE> {
        self.handler
    }

    pub(crate) fn tags(&self) -> &[u8] {
        self.arg_types.as_bytes()
    }
}

/// Insertion-ordered command table holding at most `COMMANDS` entries.
///
/// Names are not required to be unique. Lookup returns the first match, so a
/// later registration under an existing name is never reached.
#[derive(Debug)]
pub struct Registry<
    const COMMANDS: usize,
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> {
    commands: Vec<Command<ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>, COMMANDS>,
}

impl<
    const COMMANDS: usize,
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> Default for Registry<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<
    const COMMANDS: usize,
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> Registry<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>
{
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command after validating every bound. Nothing is stored on error.
    pub fn register(
        &mut self,
        name: &str,
        arg_types: &str,
        handler: Handler<ARG_SIZE, RESPONSE_SIZE>,
    ) -> Result<(), RegisterError> {
        if self.commands.is_full() {
            return Err(RegisterError::RegistryFull);
        }
        if name.len() > NAME_LEN {
            return Err(RegisterError::NameTooLong);
        }
        if arg_types.len() > ARGS {
            return Err(RegisterError::TooManyArgs);
        }
        if let Some(tag) = arg_types
            .bytes()
            .find(|tag| ArgType::from_tag(*tag).is_none())
        {
            return Err(RegisterError::InvalidArgType(tag));
        }

        let command = Command {
            name: String::try_from(name).map_err(|_| RegisterError::NameTooLong)?,
            arg_types: String::try_from(arg_types).map_err(|_| RegisterError::TooManyArgs)?,
            handler,
        };
        self.commands
            .push(command)
            .map_err(|_| RegisterError::RegistryFull)
    }

    /// First command whose name equals `name` byte for byte.
    pub fn find(&self, name: &[u8]) -> Option<&Command<ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>> {
        self.commands
            .iter()
            .find(|command| command.name.as_bytes() == name)
    }

    /// All registered commands, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command<ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command has been registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
