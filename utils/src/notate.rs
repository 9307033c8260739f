
use super::error::*;

///
/// A trait representing the concept of canonical notation.
///
/// An implementor provides a canonical notation by way of notate(),
/// and recognizes potentially non-canonical notation by way of parse().
///
pub trait Notate 
    where Self: Sized
{
    ///
    /// Returns the canonical notational string for this object.
    ///
    fn notate (& self) -> String;

    ///
    /// Constructs a new object from the given notational string, provided
    /// that the notation is valid.
    ///
    fn parse (s: & str) -> Result<Self>;
}

///
/// The ways a notational string can be rejected.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError 
{
    #[error("Invalid notation '{notation}' for {kind}.")]
    Invalid { kind: & 'static str, notation: String },

    #[error("Invalid length {found} for {kind}, expected {expected}.")]
    Length { kind: & 'static str, expected: usize, found: usize }
}

impl NotationError 
{
    ///
    /// Shorthand for an unrecognized token.
    ///
    pub fn invalid (kind: & 'static str, notation: & str) -> Error 
    {
        NotationError::Invalid { kind, notation: notation.to_owned() }.into()
    }
}
