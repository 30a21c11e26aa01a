use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

/// Renders a sequence as a human readable enumeration: `'a', 'b' or 'c'`.
#[derive(Clone, PartialEq, Hash, Eq)]
pub struct List<C> {
    pub data: C,
    pub separator: &'static str,
    pub final_separator: &'static str,
}

impl<C> List<C> {
    pub fn new(contents: C) -> Self {
        Self { data: contents, separator: ", ", final_separator: " or " }
    }

    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_final_separator(mut self, final_separator: &'static str) -> Self {
        self.final_separator = final_separator;
        self
    }
}

impl<C: Debug> Debug for List<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.data, f)
    }
}

impl<X: Display, T: Deref<Target = [X]>> Display for List<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.data.deref() {
            [] => f.write_str("nothing"),
            [x] => write!(f, "{x}"),
            [body @ .., last] => {
                for (i, x) in body.iter().enumerate() {
                    if i != 0 {
                        f.write_str(self.separator)?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, "{}{last}", self.final_separator)
            }
        }
    }
}
