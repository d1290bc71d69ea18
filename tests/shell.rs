use cmdparser::parser::{Argument, RegisterError, Response};
use cmdparser::register_commands;
use cmdparser::system::shell::*;
use core::fmt::Write;
use std::cell::RefCell;

thread_local! {
    /// Per-test output capture; each test runs on its own thread
    static TEST_OUTPUT: RefCell<String> = const { RefCell::new(String::new()) };
}

fn test_output_fn(text: &str) {
    TEST_OUTPUT.with(|buffer| buffer.borrow_mut().push_str(text));
}

fn get_test_output() -> String {
    TEST_OUTPUT.with(|buffer| core::mem::take(&mut *buffer.borrow_mut()))
}

/// Test command handlers
fn add_handler(args: &[Argument<32>], response: &mut Response<64>) {
    let a = args[0].as_int64().unwrap();
    let b = args[1].as_int64().unwrap();
    let _ = write!(response, "{}", a + b);
}

fn greet_handler(args: &[Argument<32>], response: &mut Response<64>) {
    let _ = write!(response, "hi {}", args[0].as_str().unwrap());
}

fn silent_handler(_args: &[Argument<32>], _response: &mut Response<64>) {}

fn custom_list_handler(_args: &[Argument<32>], response: &mut Response<64>) {
    let _ = response.push_str("custom list");
}

fn setup_shell() -> Shell {
    let mut shell: Shell = Shell::new();
    shell.set_output_function(test_output_fn);
    shell.set_echo(false);
    register_commands!(
        shell.parser_mut(),
        ("add", "ii", add_handler),
        ("greet", "s", greet_handler),
        ("quiet", "", silent_handler),
    )
    .unwrap();
    get_test_output();
    shell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let shell: Shell = Shell::new();
        assert_eq!(shell.parser().commands().count(), 0);

        let shell: Shell = Shell::default();
        assert!(shell.parser().registry().is_empty());
    }

    #[test]
    fn test_register_command() {
        let mut shell: Shell = Shell::new();
        assert_eq!(shell.register_command("add", "ii", add_handler), Ok(()));
        assert_eq!(
            shell.register_command("add", "iq", add_handler),
            Err(RegisterError::InvalidArgType(b'q'))
        );
        assert_eq!(shell.parser().commands().count(), 1);
    }

    #[test]
    fn test_input_printable_characters() {
        let mut shell = setup_shell();
        shell.set_echo(true);

        assert_eq!(shell.input(b"hello"), Ok(()));
        assert_eq!(get_test_output(), "hello");
    }

    #[test]
    fn test_input_no_echo() {
        let mut shell = setup_shell();

        assert_eq!(shell.input(b"hello"), Ok(()));
        assert_eq!(get_test_output(), "");
    }

    #[test]
    fn test_execute_command() {
        let mut shell = setup_shell();

        shell.input(b"add 2 40\r").unwrap();
        assert_eq!(get_test_output(), "42\r\n");
    }

    #[test]
    fn test_execute_with_echo() {
        let mut shell = setup_shell();
        shell.set_echo(true);

        shell.input(b"add 1 1\r").unwrap();
        assert_eq!(get_test_output(), "add 1 1\r2\r\n");
    }

    #[test]
    fn test_line_feed_executes() {
        let mut shell = setup_shell();

        shell.input(b"greet \"bob\"\n").unwrap();
        assert_eq!(get_test_output(), "hi bob\r\n");
    }

    #[test]
    fn test_crlf_runs_once() {
        let mut shell = setup_shell();

        shell.input(b"add 1 2\r\n").unwrap();
        assert_eq!(get_test_output(), "3\r\n");
    }

    #[test]
    fn test_input_in_chunks() {
        let mut shell = setup_shell();

        shell.input(b"ad").unwrap();
        shell.input(b"d 5 ").unwrap();
        shell.input(b"5").unwrap();
        assert_eq!(get_test_output(), "");
        shell.input(b"\r").unwrap();
        assert_eq!(get_test_output(), "10\r\n");
    }

    #[test]
    fn test_backspace() {
        let mut shell = setup_shell();
        shell.set_echo(true);

        shell.input(b"adx\x08d 1 1").unwrap();
        assert_eq!(get_test_output(), "adx\x08 \x08d 1 1");

        shell.input(b"\x7f2\r").unwrap();
        assert_eq!(get_test_output(), "\x08 \x082\r3\r\n");
    }

    #[test]
    fn test_backspace_on_empty_line() {
        let mut shell = setup_shell();
        shell.set_echo(true);

        shell.input(b"\x08\x7f").unwrap();
        assert_eq!(get_test_output(), "");
    }

    #[test]
    fn test_control_characters_ignored() {
        let mut shell = setup_shell();

        shell.input(b"\x01add\x1b 4\t 4\r").unwrap();
        assert_eq!(get_test_output(), "8\r\n");
    }

    #[test]
    fn test_empty_lines_ignored() {
        let mut shell = setup_shell();

        shell.input(b"\r\n   \r").unwrap();
        assert_eq!(get_test_output(), "");
    }

    #[test]
    fn test_silent_command() {
        let mut shell = setup_shell();

        shell.input(b"quiet\r").unwrap();
        assert_eq!(get_test_output(), "");
    }

    #[test]
    fn test_parse_error_output() {
        let mut shell = setup_shell();

        shell.input(b"bogus\r").unwrap();
        assert_eq!(get_test_output(), "parse error: unknown command name bogus\r\n");

        shell.input(b"add 1\r").unwrap();
        assert_eq!(
            get_test_output(),
            "parse error: missing whitespace before arg 2\r\n"
        );
    }

    #[test]
    fn test_list_command() {
        let mut shell = setup_shell();

        shell.input(b"list\r").unwrap();
        assert_eq!(
            get_test_output(),
            "Available commands:\r\nadd\tii\r\ngreet\ts\r\nquiet\t\r\n"
        );
    }

    #[test]
    fn test_list_command_disabled() {
        let mut shell = setup_shell();
        shell.set_list_command(false);

        shell.input(b"list\r").unwrap();
        assert_eq!(get_test_output(), "parse error: unknown command name list\r\n");
    }

    #[test]
    fn test_registered_list_takes_precedence() {
        let mut shell = setup_shell();
        shell.register_command("list", "", custom_list_handler).unwrap();

        shell.input(b"list\r").unwrap();
        assert_eq!(get_test_output(), "custom list\r\n");
    }

    #[test]
    fn test_buffer_overflow() {
        let mut shell: Shell<8> = Shell::new();
        shell.set_output_function(test_output_fn);
        shell.set_echo(false);
        shell.register_command("add", "ii", add_handler).unwrap();

        assert_eq!(shell.input(b"add 1 20"), Ok(()));
        assert_eq!(shell.input(b"0"), Err(ShellError::BufferOverflow));

        // The truncated line must not run
        shell.input(b"\r").unwrap();
        assert_eq!(get_test_output(), "");

        // The next line is handled normally
        shell.input(b"add 1 2\r").unwrap();
        assert_eq!(get_test_output(), "3\r\n");
    }

    #[test]
    fn test_buffer_overflow_discards_rest_of_line() {
        let mut shell: Shell<8> = Shell::new();
        shell.set_output_function(test_output_fn);
        shell.register_command("add", "ii", add_handler).unwrap();

        assert_eq!(shell.input(b"add 1 2345"), Err(ShellError::BufferOverflow));
        get_test_output();

        // Bytes up to the line end are ignored, without echo or editing
        shell.input(b"6 7\x08\x08\r").unwrap();
        assert_eq!(get_test_output(), "\r");

        shell.set_echo(false);
        shell.input(b"add 4 5\n").unwrap();
        assert_eq!(get_test_output(), "9\r\n");
    }

    #[test]
    fn test_buffer_overflow_stops_processing() {
        let mut shell: Shell<4> = Shell::new();
        shell.set_output_function(test_output_fn);
        shell.set_echo(false);

        assert_eq!(shell.input(b"abcdef\r"), Err(ShellError::BufferOverflow));
        assert_eq!(get_test_output(), "");
    }

    #[test]
    fn test_no_output_function() {
        let mut shell: Shell = Shell::new();
        shell.register_command("add", "ii", add_handler).unwrap();
        assert_eq!(shell.input(b"add 1 2\r"), Ok(()));
    }

    #[test]
    fn test_shell_error_display() {
        assert_eq!(ShellError::BufferOverflow.to_string(), "input line too long");
    }
}
