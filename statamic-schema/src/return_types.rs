//! Return types of Statamic facade and query builder methods.
//!
//! The facades are declared to return loosely typed values; these answers
//! narrow them to the concrete Statamic classes.

use crate::semantic::SemanticType;

/// `Statamic\Facades\Entry`
pub const ENTRY_FACADE: &str = "Statamic\\Facades\\Entry";
/// `Statamic\Facades\Collection`
pub const COLLECTION_FACADE: &str = "Statamic\\Facades\\Collection";
/// `Statamic\Facades\GlobalSet`
pub const GLOBAL_SET_FACADE: &str = "Statamic\\Facades\\GlobalSet";

const ENTRY_CLASS: &str = "Statamic\\Entries\\Entry";
const COLLECTION_CLASS: &str = "Statamic\\Entries\\Collection";
const GLOBAL_SET_CLASS: &str = "Statamic\\Globals\\GlobalSet";
const ENTRY_QUERY_BUILDER: &str = "Statamic\\Stache\\Query\\EntryQueryBuilder";
const RESULT_COLLECTION: &str = "Illuminate\\Support\\Collection";

/// Query builder classes and the model each one returns.
pub const BUILDER_MODELS: &[(&str, &str)] = &[
    (ENTRY_QUERY_BUILDER, ENTRY_CLASS),
    (
        "Statamic\\Stache\\Query\\TermQueryBuilder",
        "Statamic\\Taxonomies\\LocalizedTerm",
    ),
    ("Statamic\\Assets\\QueryBuilder", "Statamic\\Assets\\Asset"),
];

/// Answers the return type of supported facade and builder calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnTypeResolver;

impl ReturnTypeResolver {
    /// Create a resolver.
    pub fn new() -> Self {
        Self
    }

    /// True when [`static_call_type`](Self::static_call_type) has an answer.
    pub fn supports_static_method(&self, class: &str, method: &str) -> bool {
        self.static_call_type(class, method).is_some()
    }

    /// Return type of `class::method(...)`.
    pub fn static_call_type(&self, class: &str, method: &str) -> Option<SemanticType> {
        let found = |model: &str| SemanticType::nullable(SemanticType::object(model));

        match (class.trim_start_matches('\\'), method) {
            (ENTRY_FACADE, "query") => Some(SemanticType::object(ENTRY_QUERY_BUILDER)),
            (ENTRY_FACADE, "find" | "findByUri") => Some(found(ENTRY_CLASS)),
            (ENTRY_FACADE, "findOrFail" | "make") => Some(SemanticType::object(ENTRY_CLASS)),
            (COLLECTION_FACADE, "find" | "findByHandle") => Some(found(COLLECTION_CLASS)),
            (COLLECTION_FACADE, "findOrFail") => Some(SemanticType::object(COLLECTION_CLASS)),
            (GLOBAL_SET_FACADE, "find" | "findByHandle") => Some(found(GLOBAL_SET_CLASS)),
            (GLOBAL_SET_FACADE, "findOrFail") => Some(SemanticType::object(GLOBAL_SET_CLASS)),
            _ => None,
        }
    }

    /// Model class of the first receiver class that is a known query builder.
    pub fn model_for_builder<S: AsRef<str>>(&self, receiver_classes: &[S]) -> Option<&'static str> {
        receiver_classes.iter().find_map(|class| {
            let class = class.as_ref().trim_start_matches('\\');
            BUILDER_MODELS
                .iter()
                .find(|(builder, _)| *builder == class)
                .map(|(_, model)| *model)
        })
    }

    /// Return type of `$builder->method(...)` for a receiver that may be any
    /// of `receiver_classes`.
    pub fn method_call_type<S: AsRef<str>>(
        &self,
        receiver_classes: &[S],
        method: &str,
    ) -> Option<SemanticType> {
        let model = self.model_for_builder(receiver_classes)?;
        let item = SemanticType::object(model);

        match method {
            "get" => Some(SemanticType::generic(
                RESULT_COLLECTION,
                vec![SemanticType::Int, item],
            )),
            "first" | "find" => Some(SemanticType::nullable(item)),
            "firstOrFail" => Some(item),
            "count" => Some(SemanticType::Int),
            "exists" => Some(SemanticType::Bool),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_type(class: &str, method: &str) -> Option<String> {
        ReturnTypeResolver::new()
            .static_call_type(class, method)
            .map(|ty| ty.to_string())
    }

    fn builder_type(builder: &str, method: &str) -> Option<String> {
        ReturnTypeResolver::new()
            .method_call_type(&[builder], method)
            .map(|ty| ty.to_string())
    }

    #[test]
    fn test_entry_facade() {
        assert_eq!(
            static_type(ENTRY_FACADE, "query").as_deref(),
            Some("Statamic\\Stache\\Query\\EntryQueryBuilder")
        );
        assert_eq!(
            static_type(ENTRY_FACADE, "find").as_deref(),
            Some("Statamic\\Entries\\Entry|null")
        );
        assert_eq!(
            static_type("\\Statamic\\Facades\\Entry", "findByUri").as_deref(),
            Some("Statamic\\Entries\\Entry|null")
        );
        assert_eq!(
            static_type(ENTRY_FACADE, "findOrFail").as_deref(),
            Some("Statamic\\Entries\\Entry")
        );
        assert_eq!(
            static_type(ENTRY_FACADE, "make").as_deref(),
            Some("Statamic\\Entries\\Entry")
        );
        assert_eq!(static_type(ENTRY_FACADE, "all"), None);
    }

    #[test]
    fn test_collection_and_global_set_facades() {
        assert_eq!(
            static_type(COLLECTION_FACADE, "findByHandle").as_deref(),
            Some("Statamic\\Entries\\Collection|null")
        );
        assert_eq!(
            static_type(COLLECTION_FACADE, "findOrFail").as_deref(),
            Some("Statamic\\Entries\\Collection")
        );
        assert_eq!(
            static_type(GLOBAL_SET_FACADE, "find").as_deref(),
            Some("Statamic\\Globals\\GlobalSet|null")
        );
        assert_eq!(
            static_type(GLOBAL_SET_FACADE, "findOrFail").as_deref(),
            Some("Statamic\\Globals\\GlobalSet")
        );
        assert!(!ReturnTypeResolver::new().supports_static_method(COLLECTION_FACADE, "make"));
        assert!(ReturnTypeResolver::new().supports_static_method(GLOBAL_SET_FACADE, "find"));
    }

    #[test]
    fn test_entry_query_builder() {
        let builder = "Statamic\\Stache\\Query\\EntryQueryBuilder";
        assert_eq!(
            builder_type(builder, "get").as_deref(),
            Some("Illuminate\\Support\\Collection<int, Statamic\\Entries\\Entry>")
        );
        assert_eq!(
            builder_type(builder, "first").as_deref(),
            Some("Statamic\\Entries\\Entry|null")
        );
        assert_eq!(
            builder_type(builder, "firstOrFail").as_deref(),
            Some("Statamic\\Entries\\Entry")
        );
        assert_eq!(builder_type(builder, "count").as_deref(), Some("int"));
        assert_eq!(builder_type(builder, "exists").as_deref(), Some("bool"));
        assert_eq!(builder_type(builder, "where"), None);
    }

    #[test]
    fn test_term_and_asset_builders() {
        assert_eq!(
            builder_type("Statamic\\Stache\\Query\\TermQueryBuilder", "find").as_deref(),
            Some("Statamic\\Taxonomies\\LocalizedTerm|null")
        );
        assert_eq!(
            builder_type("Statamic\\Assets\\QueryBuilder", "get").as_deref(),
            Some("Illuminate\\Support\\Collection<int, Statamic\\Assets\\Asset>")
        );
    }

    #[test]
    fn test_unknown_builder() {
        assert_eq!(builder_type("Illuminate\\Database\\Query\\Builder", "get"), None);

        let resolver = ReturnTypeResolver::new();
        let receivers = ["App\\Query\\Custom", "Statamic\\Assets\\QueryBuilder"];
        assert_eq!(
            resolver.model_for_builder(&receivers),
            Some("Statamic\\Assets\\Asset")
        );
    }
}
