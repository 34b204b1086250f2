/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! Error types for declaration generation.

use ironspec_dictionary::DictionaryError;
use thiserror::Error;

/// Errors raised while generating declaration artifacts.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The specification document failed to parse or resolve.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// I/O error reading the specification file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
