// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod document;
mod masking;
mod normalization;
mod stats;

// This is the public API of the document validation core
pub use checksum::{
    is_valid_cnpj, is_valid_cpf, validate, validate_document, ChecksumValidator, CnpjChecksum,
    CpfChecksum,
};
pub use document::{classify, CheckResult, Document, DocumentKind, ParseDocumentError};
pub use masking::{format_cnpj, format_cpf, format_document};
pub use normalization::{normalize, DigitString};
