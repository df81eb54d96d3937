// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod attribute;
pub(crate) mod consts;
pub(crate) mod flag;
pub(crate) mod version;

pub use attribute::AttributeCompatibility;
pub use flag::GeneralPurposeFlag;
