use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}", source))]
    Bootstrap { source: bootstrap::Error },

    #[snafu(display("DOM error: {}", msg))]
    Dom { msg: String },
}
