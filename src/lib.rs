#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use kraft_json as json;
pub use kraft_reflect as reflect;
pub use kraft_utils as utils;
