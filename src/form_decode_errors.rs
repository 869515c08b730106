use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

/// Failures while reading a request body for decoding.
///
/// The decoder itself never fails; these can only come out of `DecodedFormData::parse`, which
/// has to read the body off the wire first.
#[derive(Debug)]
pub enum FormDecodeError {
    IoError(io::Error),
    DataTooLargeError,
}

impl From<io::Error> for FormDecodeError {
    #[inline]
    fn from(err: io::Error) -> FormDecodeError {
        FormDecodeError::IoError(err)
    }
}

impl Display for FormDecodeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            FormDecodeError::IoError(err) => Display::fmt(err, f),
            FormDecodeError::DataTooLargeError => {
                f.write_str("The request body is larger than the configured read cap.")
            },
        }
    }
}

impl Error for FormDecodeError {}
