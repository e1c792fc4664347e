//! Word splitting for command lines.


/// Host rule for breaking a command line into words.
pub trait WordSplitter {
	/// Splits `line` into words, in order.
	fn split(&self, line: &str) -> Vec<String>;
}

/// Shell-like splitter.
///
/// Whitespace separates words. Quoted runs stay inside their word verbatim,
/// quotes included; inside double quotes a backslash escapes the next char. An
/// unterminated quote runs to the end of the line. Unquoted `|`, `;` and `&`
/// form words of their own, with repeats of the same char grouped (`&&`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellWords;

impl WordSplitter for ShellWords {
	fn split(&self, line: &str) -> Vec<String> {
		split_words(line)
	}
}

/// Closure-backed splitter adapter.
pub struct FnSplitter<F> {
	f: F,
}

impl<F> FnSplitter<F> {
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<F> WordSplitter for FnSplitter<F>
where
	F: Fn(&str) -> Vec<String>,
{
	fn split(&self, line: &str) -> Vec<String> {
		(self.f)(line)
	}
}

fn is_operator(c: char) -> bool {
	matches!(c, '|' | ';' | '&')
}

/// Splits `line` with the [`ShellWords`] rules.
pub fn split_words(line: &str) -> Vec<String> {
	let mut words = Vec::new();
	let mut word = String::new();
	let mut chars = line.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			c if c.is_whitespace() => flush(&mut words, &mut word),
			c if is_operator(c) => {
				flush(&mut words, &mut word);
				let mut op = String::from(c);
				while let Some(&next) = chars.peek()
					&& next == c
				{
					op.push(next);
					chars.next();
				}
				words.push(op);
			}
			'\'' => {
				word.push(c);
				for q in chars.by_ref() {
					word.push(q);
					if q == '\'' {
						break;
					}
				}
			}
			'"' => {
				word.push(c);
				while let Some(q) = chars.next() {
					word.push(q);
					match q {
						'\\' => {
							if let Some(escaped) = chars.next() {
								word.push(escaped);
							}
						}
						'"' => break,
						_ => {}
					}
				}
			}
			'\\' => {
				word.push(c);
				if let Some(escaped) = chars.next() {
					word.push(escaped);
				}
			}
			_ => word.push(c),
		}
	}
	flush(&mut words, &mut word);
	words
}

fn flush(words: &mut Vec<String>, word: &mut String) {
	if !word.is_empty() {
		words.push(std::mem::take(word));
	}
}
