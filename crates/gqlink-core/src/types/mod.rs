mod list_type_annotation;
mod named_type_annotation;
mod type_annotation;

pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeAnnotationParseError;

#[cfg(test)]
mod tests;
