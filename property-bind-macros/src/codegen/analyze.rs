use syn::{Data, DeriveInput, Fields, GenericArgument, Ident, Path, PathArguments, PathSegment, Type, TypeParamBound};

use super::msgs::{
    ERR_TARGET, REASON_BAD_BACK_REFERENCE, REASON_MISSING_NAME, REASON_NOT_GENERIC, REASON_NO_ELEMENT, REASON_NO_SUCH_MEMBER,
};
use super::parse::BindingDeclaration;

/// A named field of the deriving struct, in declaration order.
pub struct Member {
    pub ident: Ident,
    pub ty: Type,
}

pub fn members_of(item: &DeriveInput) -> syn::Result<Vec<Member>> {
    match &item.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => Ok(named
                .named
                .iter()
                .filter_map(|f| {
                    f.ident.as_ref().map(|ident| Member {
                        ident: ident.clone(),
                        ty: f.ty.clone(),
                    })
                })
                .collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(&item.ident, ERR_TARGET)),
        },
        _ => Err(syn::Error::new_spanned(&item.ident, ERR_TARGET)),
    }
}

#[derive(Clone)]
pub enum ContainerShape {
    /// Instantiated through `Default`.
    Concrete(Type),
    /// Pointer to a trait object; instantiated as `ObservableVec<E>` wrapped in `pointer`.
    Abstract { declared: Type, pointer: Path },
}

impl ContainerShape {
    pub fn declared(&self) -> &Type {
        match self {
            ContainerShape::Concrete(t) => t,
            ContainerShape::Abstract { declared, .. } => declared,
        }
    }
}

pub struct ResolvedBinding {
    pub field: Ident,
    pub back_reference: Ident,
    pub container: ContainerShape,
    pub element: Type,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unresolved {
    MissingName,
    NoSuchMember,
    BadBackReference,
    NotGeneric,
    NoElementType,
}

impl Unresolved {
    pub fn reason(self) -> &'static str {
        match self {
            Unresolved::MissingName => REASON_MISSING_NAME,
            Unresolved::NoSuchMember => REASON_NO_SUCH_MEMBER,
            Unresolved::BadBackReference => REASON_BAD_BACK_REFERENCE,
            Unresolved::NotGeneric => REASON_NOT_GENERIC,
            Unresolved::NoElementType => REASON_NO_ELEMENT,
        }
    }
}

fn strip_group(ty: &Type) -> &Type {
    match ty {
        Type::Group(g) => strip_group(&g.elem),
        Type::Paren(p) => strip_group(&p.elem),
        other => other,
    }
}

// Lifetimes and const arguments are skipped: only the first *type* argument counts.
fn first_type_arg(seg: &PathSegment) -> Option<&Type> {
    match &seg.arguments {
        PathArguments::AngleBracketed(ab) => ab.args.iter().find_map(|a| match a {
            GenericArgument::Type(t) => Some(t),
            _ => None,
        }),
        _ => None,
    }
}

/// Classifies a declared field type. The first type argument is authoritative, so
/// multi-parameter containers resolve to their first parameter.
pub fn container_shape(ty: &Type) -> Result<(ContainerShape, Type), Unresolved> {
    let Type::Path(tp) = strip_group(ty) else {
        return Err(Unresolved::NotGeneric);
    };
    if tp.qself.is_some() {
        return Err(Unresolved::NotGeneric);
    }
    let seg = tp.path.segments.last().ok_or(Unresolved::NotGeneric)?;
    let first = first_type_arg(seg).ok_or(Unresolved::NotGeneric)?;
    if let Type::TraitObject(obj) = strip_group(first) {
        let element = obj
            .bounds
            .iter()
            .find_map(|b| match b {
                TypeParamBound::Trait(t) => t.path.segments.last().and_then(first_type_arg),
                _ => None,
            })
            .ok_or(Unresolved::NoElementType)?;
        let mut pointer = tp.path.clone();
        if let Some(last) = pointer.segments.last_mut() {
            last.arguments = PathArguments::None;
        }
        return Ok((
            ContainerShape::Abstract {
                declared: ty.clone(),
                pointer,
            },
            element.clone(),
        ));
    }
    Ok((ContainerShape::Concrete(ty.clone()), first.clone()))
}

/// Finds the named field and reads its container shape. Failure drops the binding, never the type.
/// A collection name that is not an identifier simply matches no field.
pub fn resolve(members: &[Member], declaration: &BindingDeclaration) -> Result<ResolvedBinding, Unresolved> {
    if declaration.collection.is_empty() || declaration.back_reference.is_empty() {
        return Err(Unresolved::MissingName);
    }
    let member = members
        .iter()
        .find(|m| m.ident == declaration.collection.as_str())
        .ok_or(Unresolved::NoSuchMember)?;
    let (container, element) = container_shape(&member.ty)?;
    let back_reference = syn::parse_str::<Ident>(&declaration.back_reference)
        .map_err(|_| Unresolved::BadBackReference)?;
    Ok(ResolvedBinding {
        field: member.ident.clone(),
        back_reference,
        container,
        element,
    })
}
