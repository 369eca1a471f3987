use super::{Acceptance, Enumeration, SemanticsEngine};
use crate::{
    aa::{Argument, LabelType},
    utils::ArgSet,
};

// Translates an enumeration of id sets into an enumeration of arguments of the engine's framework.
pub(crate) fn enumeration_to_arguments<'a, T>(
    engine: &SemanticsEngine<'a, T>,
    enumeration: Enumeration<ArgSet>,
) -> Enumeration<Vec<&'a Argument<T>>>
where
    T: LabelType,
{
    enumeration.map(|ext| engine.arguments_of(&ext))
}

// Credulous acceptance w.r.t. a set of extensions; the certificate is the first extension containing the argument.
// A negative answer over a partial enumeration is partial.
pub(crate) fn credulous_acceptance<'a, T>(
    engine: &SemanticsEngine<'a, T>,
    extensions: &Enumeration<ArgSet>,
    arg: &Argument<T>,
) -> Acceptance<Vec<&'a Argument<T>>>
where
    T: LabelType,
{
    match extensions.iter().find(|ext| ext.contains(arg.id())) {
        Some(ext) => Acceptance::new(true, Some(engine.arguments_of(ext))),
        None => Acceptance::new(false, None).with_partial(extensions.is_partial()),
    }
}

// Skeptical acceptance w.r.t. a set of extensions; the certificate is the first extension that does not contain the argument.
// A positive answer over a partial enumeration is partial.
pub(crate) fn skeptical_acceptance<'a, T>(
    engine: &SemanticsEngine<'a, T>,
    extensions: &Enumeration<ArgSet>,
    arg: &Argument<T>,
) -> Acceptance<Vec<&'a Argument<T>>>
where
    T: LabelType,
{
    match extensions.iter().find(|ext| !ext.contains(arg.id())) {
        Some(ext) => Acceptance::new(false, Some(engine.arguments_of(ext))),
        None => Acceptance::new(true, None).with_partial(extensions.is_partial()),
    }
}
