use thiserror::Error;

/// The one failure this crate can produce: a name-based call that matches no
/// known unit operation. The five plural operations themselves never fail.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Call to undefined method {0}")]
    MethodNotFound(String),
}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn it_names_the_attempted_call_in_the_message() {
        let error = Error::MethodNotFound("fortnight".to_string());

        assert_eq!("Call to undefined method fortnight", error.to_string());
    }
}
