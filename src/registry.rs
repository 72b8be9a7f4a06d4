//! Bindings generated by the derives, collected at link time via inventory.
use serde::Serialize;

/// Which derive produced a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Generation {
    /// `#[derive(PropertyBind)]`: repeatable, collection created by the generated constructor.
    Multi,
    /// `#[derive(PropertyBindSingle)]`: one binding, collection supplied by `Default`.
    Single,
}

/// Registration info for one resolved binding.
/// Generic owners are not registered: there is no single type name to record.
pub struct BindingInfo {
    pub owner: fn() -> &'static str,
    pub identity: &'static str,
    pub ordinal: usize,
    pub collection: &'static str,
    pub back_reference: &'static str,
    pub element: &'static str,
    pub generation: Generation,
}

inventory::collect!(BindingInfo);

#[derive(Debug, Clone, Serialize)]
struct BindingRecord {
    owner: &'static str,
    identity: &'static str,
    collection: &'static str,
    back_reference: &'static str,
    element: &'static str,
    generation: Generation,
}

/// Every registered binding, ordered by owner identity then declaration order.
pub fn all() -> Vec<&'static BindingInfo> {
    let mut v: Vec<&'static BindingInfo> = inventory::iter::<BindingInfo>.into_iter().collect();
    v.sort_by(|a, b| (a.identity, a.ordinal).cmp(&(b.identity, b.ordinal)));
    v
}

pub fn for_owner<T: 'static>() -> Vec<&'static BindingInfo> {
    let name = std::any::type_name::<T>();
    all().into_iter().filter(|b| (b.owner)() == name).collect()
}

/// Registry contents as a JSON array, for debugging tools.
pub fn to_json() -> serde_json::Value {
    let records: Vec<BindingRecord> = all()
        .into_iter()
        .map(|b| BindingRecord {
            owner: (b.owner)(),
            identity: b.identity,
            collection: b.collection,
            back_reference: b.back_reference,
            element: b.element,
            generation: b.generation,
        })
        .collect();
    match serde_json::to_value(records) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize binding registry");
            serde_json::Value::Array(Vec::new())
        }
    }
}
