#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use gl_cfg as cfg;
pub use gl_contract as contract;
pub use gl_span as span;
pub use gl_utils as utils;
