//! Input validation at the host boundary
//!
//! Hosts call in with an untyped argument list. Checks run in a fixed order
//! and the first failure wins, so callers always see the same message for
//! the same malformed input:
//!
//! 1. exactly one argument, and it is a record
//! 2. `keyTag` present, a string, not blank
//! 3. `data` present, a byte buffer, not empty (encrypt/decrypt)
//! 4. `touchIdPrompt` present, a string, not empty (decrypt)

use crate::error::ValidationError;
use crate::model::{Arg, AuthorizationPrompt, KeyTag, Record, DATA_FIELD};

/// Arguments of `createKeyPair`, `findKeyPair` and `deleteKeyPair`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOperationArgs {
    pub key_tag: KeyTag,
}

/// Arguments of `encrypt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataOperationArgs {
    pub key_tag: KeyTag,
    pub data: Vec<u8>,
}

/// Arguments of `decrypt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptArgs {
    pub key_tag: KeyTag,
    pub data: Vec<u8>,
    pub prompt: AuthorizationPrompt,
}

pub fn key_operation(args: &[Arg]) -> Result<KeyOperationArgs, ValidationError> {
    let options = single_record(args)?;
    Ok(KeyOperationArgs {
        key_tag: key_tag(options)?,
    })
}

pub fn data_operation(args: &[Arg]) -> Result<DataOperationArgs, ValidationError> {
    data_fields(single_record(args)?)
}

pub fn decrypt_operation(args: &[Arg]) -> Result<DecryptArgs, ValidationError> {
    let options = single_record(args)?;
    let DataOperationArgs { key_tag, data } = data_fields(options)?;
    let prompt = string_field(options, AuthorizationPrompt::FIELD)?;
    Ok(DecryptArgs {
        key_tag,
        data,
        prompt: AuthorizationPrompt::new(prompt)?,
    })
}

fn single_record(args: &[Arg]) -> Result<&Record, ValidationError> {
    let [options] = args else {
        return Err(ValidationError::ArgumentCount { actual: args.len() });
    };
    options.as_record().ok_or(ValidationError::NotARecord)
}

fn field<'a>(options: &'a Record, name: &'static str) -> Result<&'a Arg, ValidationError> {
    options
        .get(name)
        .ok_or(ValidationError::MissingField { field: name })
}

fn string_field<'a>(options: &'a Record, name: &'static str) -> Result<&'a str, ValidationError> {
    match field(options, name)? {
        Arg::Str(value) => Ok(value),
        _ => Err(ValidationError::WrongType {
            field: name,
            expected: "string",
        }),
    }
}

fn key_tag(options: &Record) -> Result<KeyTag, ValidationError> {
    KeyTag::new(string_field(options, KeyTag::FIELD)?)
}

fn data_fields(options: &Record) -> Result<DataOperationArgs, ValidationError> {
    let key_tag = key_tag(options)?;
    let data = data(options)?;
    Ok(DataOperationArgs { key_tag, data })
}

fn data(options: &Record) -> Result<Vec<u8>, ValidationError> {
    match field(options, DATA_FIELD)? {
        Arg::Bytes(bytes) if bytes.is_empty() => Err(ValidationError::Empty { field: DATA_FIELD }),
        Arg::Bytes(bytes) => Ok(bytes.clone()),
        _ => Err(ValidationError::WrongType {
            field: DATA_FIELD,
            expected: "buffer",
        }),
    }
}
