// Compile-time diagnostic strings for the derive layer.

pub(super) const ERR_TARGET: &str =
    "#[derive(PropertyBind)] / #[derive(PropertyBindSingle)] only support structs with named fields";
pub(super) const ERR_SINGLE_REPEATED: &str =
    "#[property_bind(..)] may only be attached once with #[derive(PropertyBindSingle)]; use #[derive(PropertyBind)] for several bindings";
pub(super) const ERR_ARITY: &str =
    "#[property_bind] expects two arguments: (collection_field, back_reference_field)";
pub(super) const ERR_ARG_KIND: &str = "expected a field name or a string literal";
pub(super) const ERR_UNKNOWN_OPTION: &str =
    "unknown #[property_bind] option; only `crate = \"path\"` is supported";

pub(super) const REASON_MISSING_NAME: &str = "collection or back-reference name is empty";
pub(super) const REASON_NO_SUCH_MEMBER: &str = "no field with that name";
pub(super) const REASON_BAD_BACK_REFERENCE: &str = "back-reference name is not a valid field name";
pub(super) const REASON_NOT_GENERIC: &str = "field type is not a generic container";
pub(super) const REASON_NO_ELEMENT: &str = "trait object container has no element type argument";
