//! Mount errors

use std::fmt;

use thiserror::Error;

/// Page region the animator needs from the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Grid,
    Surface,
    Header,
    About,
    Footer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grid => "algorithms grid",
            Self::Surface => "geometric decoration surface",
            Self::Header => "header content",
            Self::About => "about section",
            Self::Footer => "footer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("page shell has no {role} (selector `{selector}`)")]
    MissingNode { role: Role, selector: &'static str },
    #[error("DOM rejected operation: {0}")]
    Dom(String),
}
