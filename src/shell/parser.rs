use crate::shell::ast::Command;

/// Splits a raw line into command name and argument tail.
/// Returns None for a blank line.
pub fn parse_command_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, rest) = match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], &line[idx..]),
        None => (line, ""),
    };

    let rest = rest.trim();
    Some(Command {
        name: name.to_string(),
        args: if rest.is_empty() { None } else { Some(rest.to_string()) },
    })
}

/// Splits on the first run of whitespace into exactly two parts (`mv src dst`).
pub fn split_pair(args: &str) -> Option<(&str, &str)> {
    let args = args.trim();
    let idx = args.find(char::is_whitespace)?;
    let first = &args[..idx];
    let second = args[idx..].trim_start();
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first, second))
}

/// `file "text"`: the filename is everything before the first quote, the text
/// everything between the first and the last quote.
pub fn parse_write_args(args: &str) -> Option<(String, String)> {
    let open = args.find('"')?;
    let filename = args[..open].trim();
    let rest = &args[open + 1..];
    let close = rest.rfind('"')?;
    if filename.is_empty() {
        return None;
    }
    Some((filename.to_string(), rest[..close].to_string()))
}

/// Removes one pair of surrounding double quotes, only when both are present.
pub fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let cmd = parse_command_line("  pwd  ").unwrap();
        assert_eq!(cmd.name, "pwd");
        assert_eq!(cmd.args, None);
        assert!(parse_command_line("   ").is_none());
    }

    #[test]
    fn test_parse_keeps_raw_tail() {
        let cmd = parse_command_line("echo   \"a  b\"  ").unwrap();
        assert_eq!(cmd.name, "echo");
        assert_eq!(cmd.args.as_deref(), Some("\"a  b\""));

        let cmd = parse_command_line("cd\t/tmp").unwrap();
        assert_eq!(cmd.name, "cd");
        assert_eq!(cmd.args.as_deref(), Some("/tmp"));
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("a.txt   dir/b c.txt"), Some(("a.txt", "dir/b c.txt")));
        assert_eq!(split_pair("only"), None);
    }

    #[test]
    fn test_write_args() {
        assert_eq!(
            parse_write_args("foo \"hello\""),
            Some(("foo".to_string(), "hello".to_string()))
        );
        // text runs to the last quote, inner quotes kept
        assert_eq!(
            parse_write_args("notes.txt \"say \"hi\" twice\""),
            Some(("notes.txt".to_string(), "say \"hi\" twice".to_string()))
        );
        assert_eq!(parse_write_args("foo hello"), None);
        assert_eq!(parse_write_args("foo \"hello"), None);
        assert_eq!(parse_write_args("\"hello\""), None);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"hi\""), "hi");
        assert_eq!(strip_quotes("\"hi"), "\"hi");
        assert_eq!(strip_quotes("hi\""), "hi\"");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"\""), "");
    }
}
