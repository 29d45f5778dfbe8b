use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Mount target not found: {}", selector))]
    MountTargetNotFound { selector: String },

    #[snafu(display("Application already mounted"))]
    AlreadyMounted,

    #[snafu(display("Invalid mount target: {}", msg))]
    InvalidMountTarget { msg: String },

    #[snafu(display("Config error: {}", msg))]
    Config { msg: String },

    #[snafu(display("{}", msg))]
    Whatever { msg: String },
}

// Allow plain messages to be converted to Error
impl From<String> for Error {
    fn from(val: String) -> Self {
        Self::Whatever { msg: val }
    }
}
