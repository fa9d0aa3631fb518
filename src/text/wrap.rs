use log::trace;

use crate::{Error, Result};

/// Greedy line wrapper.
///
/// Widths are counted in `char`s. A line breaks at the last space that still
/// fits (a space right after a full line counts), or hard at the column width
/// when there is none. By default the whole run of spaces at a break is
/// dropped, and lines left blank by that are not emitted.
#[derive(Debug, Clone)]
pub struct TextWrapper {
    cols: usize,
    /// Carry the break space to the start of the next line instead of dropping it
    keep_break_spaces: bool,
}

impl TextWrapper {
    /// Creates a wrapper for lines of at most `cols` characters that drops break spaces
    pub fn new(cols: usize) -> Self {
        TextWrapper {
            cols,
            keep_break_spaces: false,
        }
    }

    /// Keep the space a line was broken at as the first character of the next line
    pub fn keep_break_spaces(mut self, keep: bool) -> Self {
        self.keep_break_spaces = keep;
        self
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Splits `text` into lines no longer than the column width
    pub fn wrap(&self, text: &str) -> Result<Vec<String>> {
        let cols = self.cols;
        if cols == 0 {
            return Err(Error::InvalidColumns);
        }

        let chars: Vec<char> = text.chars().collect();
        let mut rest = chars.as_slice();
        let mut lines = Vec::new();

        while rest.len() > cols {
            let window = &rest[..=cols];
            // A kept space leads the next line, so it cannot be a break point again
            let skip = usize::from(self.keep_break_spaces);
            let space = window[skip..]
                .iter()
                .rposition(|&c| c == ' ')
                .map(|i| i + skip);

            let (line, next) = match space {
                Some(end) if self.keep_break_spaces => (&rest[..end], &rest[end..]),
                Some(end) => (trim_spaces_end(&rest[..end]), trim_spaces_start(&rest[end..])),
                None => (&rest[..cols], &rest[cols..]),
            };

            trace!("Wrapped line of {} chars, {} remaining", line.len(), next.len());
            if !line.is_empty() {
                lines.push(line.iter().collect());
            }
            rest = next;
        }

        let blank = rest.iter().all(|&c| c == ' ');
        if !rest.is_empty() && (self.keep_break_spaces || !blank) {
            lines.push(rest.iter().collect());
        }

        Ok(lines)
    }
}

fn trim_spaces_start(chars: &[char]) -> &[char] {
    let spaces = chars.iter().take_while(|&&c| c == ' ').count();
    &chars[spaces..]
}

fn trim_spaces_end(chars: &[char]) -> &[char] {
    let spaces = chars.iter().rev().take_while(|&&c| c == ' ').count();
    &chars[..chars.len() - spaces]
}

/// Wraps `text` to lines of at most `cols` characters, dropping the spaces broken at
pub fn wrap(text: &str, cols: usize) -> Result<Vec<String>> {
    TextWrapper::new(cols).wrap(text)
}
