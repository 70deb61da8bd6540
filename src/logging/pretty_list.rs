use std::fmt;

/// Wrapper for &[T] which can be pretty-printed as a markdown-style list.
/// Used for multiline logs such as the stages of a shader program.
pub struct PrettyList<'data, T>(pub &'data [T]);

impl<'data, T> fmt::Display for PrettyList<'data, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")?;
        for entry in self.0 {
            f.write_fmt(format_args!("- {}\n", entry))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_one_entry_per_line() {
        let stages = ["vertex: quad.vert", "fragment: quad.frag"];
        assert_eq!(
            PrettyList(&stages).to_string(),
            "\n- vertex: quad.vert\n- fragment: quad.frag\n"
        );
    }

    #[test]
    fn empty_list_is_a_single_newline() {
        let empty: [String; 0] = [];
        assert_eq!(PrettyList(&empty).to_string(), "\n");
    }
}
