use regex::Regex;
use std::sync::OnceLock;

fn plain_word() -> &'static Regex {
    static PLAIN: OnceLock<Regex> = OnceLock::new();
    PLAIN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_@%+=:,./-]+$").expect("valid regex"))
}

fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        "''".to_string()
    } else if plain_word().is_match(arg) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Renders a program and its arguments as a command line that can be pasted
/// into a POSIX shell.
pub fn format_invocation(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a typed command line into program and arguments.
///
/// Single and double quotes group words; a backslash escapes the next
/// character outside single quotes. Returns `None` for blank input or an
/// unterminated quote.
pub fn parse_command_line(text: &str) -> Option<(String, Vec<String>)> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('"'), '\\') | (None, '\\') => {
                current.push(chars.next()?);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return None;
    }
    if in_word {
        words.push(current);
    }

    let mut words = words.into_iter();
    let program = words.next()?;
    Some((program, words.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_arguments_are_left_alone() {
        let line = format_invocation("ffmpeg", &args(&["-i", "in.mp4", "-c", "copy", "out.mkv"]));
        assert_eq!(line, "ffmpeg -i in.mp4 -c copy out.mkv");
    }

    #[test]
    fn arguments_with_spaces_are_quoted() {
        let line = format_invocation("ffmpeg", &args(&["-i", "/tmp/my clip.mov", ""]));
        assert_eq!(line, "ffmpeg -i '/tmp/my clip.mov' ''");
    }

    #[test]
    fn single_quotes_are_escaped() {
        let line = format_invocation("ffprobe", &args(&["it's.mp4"]));
        assert_eq!(line, r"ffprobe 'it'\''s.mp4'");
    }

    #[test]
    fn parses_quoted_words() {
        let (program, rest) =
            parse_command_line(r#"ffmpeg -i "my clip.mov" -metadata 'title=a b' out\ file.mkv"#)
                .expect("parse");
        assert_eq!(program, "ffmpeg");
        assert_eq!(
            rest,
            args(&["-i", "my clip.mov", "-metadata", "title=a b", "out file.mkv"])
        );
    }

    #[test]
    fn empty_quotes_make_an_empty_argument() {
        let (_, rest) = parse_command_line("echo '' x").expect("parse");
        assert_eq!(rest, args(&["", "x"]));
    }

    #[test]
    fn rejects_blank_and_unterminated_input() {
        assert_eq!(parse_command_line("   "), None);
        assert_eq!(parse_command_line("ffmpeg -i 'oops"), None);
        assert_eq!(parse_command_line("trailing\\"), None);
    }

    #[test]
    fn formatted_line_parses_back_to_the_same_words() {
        let original = args(&["-ss", "00:00:01.5", "-i", "a b'c.mp4"]);
        let line = format_invocation("ffmpeg", &original);
        let (program, parsed) = parse_command_line(&line).expect("parse");
        assert_eq!(program, "ffmpeg");
        assert_eq!(parsed, original);
    }
}
