//! Word wrapping to a fixed cell width

use super::TextMetrics;

impl TextMetrics {
    /// Word-wrap text so every line fits in `max_width` cells
    ///
    /// Explicit newlines always start a new line. Words longer than a line
    /// are broken across lines. A single character wider than `max_width`
    /// is emitted on a line of its own so wrapping always makes progress.
    pub fn wrap(&self, text: &str, max_width: usize) -> Vec<String> {
        if max_width == 0 {
            return vec![];
        }

        let mut result = Vec::new();

        for paragraph in text.split('\n') {
            let paragraph = paragraph.trim_end_matches('\r');
            let mut current_line = String::new();
            let mut current_width = 0usize;

            for word in paragraph.split_whitespace() {
                let word_width = self.display_width(word);

                if current_width > 0 && current_width + 1 + word_width <= max_width {
                    current_line.push(' ');
                    current_line.push_str(word);
                    current_width += 1 + word_width;
                    continue;
                }

                if current_width > 0 {
                    result.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }

                if word_width <= max_width {
                    current_line.push_str(word);
                    current_width = word_width;
                    continue;
                }

                // Word too long, break it
                let mut rest = word;
                while !rest.is_empty() {
                    let mut chunk = self.trim_to_width(rest, max_width);
                    if chunk.is_empty() {
                        let first = rest.chars().next().map_or(rest.len(), char::len_utf8);
                        chunk = &rest[..first];
                    }
                    rest = &rest[chunk.len()..];
                    if rest.is_empty() {
                        current_line.push_str(chunk);
                        current_width = self.display_width(chunk);
                    } else {
                        result.push(chunk.to_string());
                    }
                }
            }

            result.push(current_line);
        }

        result
    }
}
