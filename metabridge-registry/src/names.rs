//! Stable type-name and property-name constants.
//!
//! The platform's full catalog of identifiers is an external collaborator;
//! this module carries the subset the shipped converters depend on, so the
//! names live in exactly one place.

// ── Entity type names ────────────────────────────────────────────

pub const REFERENCEABLE_TYPE_NAME: &str = "Referenceable";
pub const GLOSSARY_TYPE_NAME: &str = "Glossary";
pub const GLOSSARY_CATEGORY_TYPE_NAME: &str = "GlossaryCategory";
pub const GLOSSARY_TERM_TYPE_NAME: &str = "GlossaryTerm";
pub const EXTERNAL_GLOSSARY_LINK_TYPE_NAME: &str = "ExternalGlossaryLink";
pub const ANNOTATION_TYPE_NAME: &str = "Annotation";
pub const ANNOTATION_REVIEW_TYPE_NAME: &str = "AnnotationReview";
pub const CONNECTION_TYPE_NAME: &str = "Connection";
pub const CONNECTOR_TYPE_TYPE_NAME: &str = "ConnectorType";
pub const ENDPOINT_TYPE_NAME: &str = "Endpoint";
pub const SCHEMA_TYPE_TYPE_NAME: &str = "SchemaType";

// ── Relationship type names ──────────────────────────────────────

pub const CATEGORY_ANCHOR_TYPE_NAME: &str = "CategoryAnchor";
pub const CATEGORY_HIERARCHY_LINK_TYPE_NAME: &str = "CategoryHierarchyLink";
pub const TERM_CATEGORIZATION_TYPE_NAME: &str = "TermCategorization";
pub const LIBRARY_CATEGORY_REFERENCE_TYPE_NAME: &str = "LibraryCategoryReference";
pub const ANNOTATION_REVIEW_LINK_TYPE_NAME: &str = "AnnotationReviewLink";
pub const ASSOCIATED_ANNOTATION_TYPE_NAME: &str = "AssociatedAnnotation";
pub const CONNECTION_CONNECTOR_TYPE_TYPE_NAME: &str = "ConnectionConnectorType";
pub const CONNECTION_ENDPOINT_TYPE_NAME: &str = "ConnectionEndpoint";

// ── Common property names ────────────────────────────────────────

pub const QUALIFIED_NAME_PROPERTY_NAME: &str = "qualifiedName";
pub const ADDITIONAL_PROPERTIES_PROPERTY_NAME: &str = "additionalProperties";
pub const DISPLAY_NAME_PROPERTY_NAME: &str = "displayName";
pub const DESCRIPTION_PROPERTY_NAME: &str = "description";

// ── Glossary property names ──────────────────────────────────────

pub const LANGUAGE_PROPERTY_NAME: &str = "language";
pub const USAGE_PROPERTY_NAME: &str = "usage";
pub const SUMMARY_PROPERTY_NAME: &str = "summary";
pub const EXAMPLES_PROPERTY_NAME: &str = "examples";
pub const ABBREVIATION_PROPERTY_NAME: &str = "abbreviation";

// ── Annotation property names ────────────────────────────────────

pub const ANNOTATION_TYPE_PROPERTY_NAME: &str = "annotationType";
pub const CONFIDENCE_LEVEL_PROPERTY_NAME: &str = "confidenceLevel";
pub const EXPRESSION_PROPERTY_NAME: &str = "expression";
pub const EXPLANATION_PROPERTY_NAME: &str = "explanation";
pub const ANALYSIS_STEP_PROPERTY_NAME: &str = "analysisStep";
pub const JSON_PROPERTIES_PROPERTY_NAME: &str = "jsonProperties";
pub const ANNOTATION_STATUS_PROPERTY_NAME: &str = "annotationStatus";

// ── Connection property names ────────────────────────────────────

pub const USER_ID_PROPERTY_NAME: &str = "userId";
pub const CLEAR_PASSWORD_PROPERTY_NAME: &str = "clearPassword";
pub const ENCRYPTED_PASSWORD_PROPERTY_NAME: &str = "encryptedPassword";
pub const SECURED_PROPERTIES_PROPERTY_NAME: &str = "securedProperties";
pub const CONFIGURATION_PROPERTIES_PROPERTY_NAME: &str = "configurationProperties";
pub const CONNECTOR_PROVIDER_PROPERTY_NAME: &str = "connectorProviderClassName";
pub const RECOGNIZED_ADDITIONAL_PROPERTIES_PROPERTY_NAME: &str = "recognizedAdditionalProperties";
pub const RECOGNIZED_SECURED_PROPERTIES_PROPERTY_NAME: &str = "recognizedSecuredProperties";
pub const RECOGNIZED_CONFIGURATION_PROPERTIES_PROPERTY_NAME: &str =
    "recognizedConfigurationProperties";
pub const NETWORK_ADDRESS_PROPERTY_NAME: &str = "networkAddress";
pub const PROTOCOL_PROPERTY_NAME: &str = "protocol";
pub const ENCRYPTION_METHOD_PROPERTY_NAME: &str = "encryptionMethod";

// ── Schema type property names ───────────────────────────────────

pub const VERSION_NUMBER_PROPERTY_NAME: &str = "versionNumber";
pub const AUTHOR_PROPERTY_NAME: &str = "author";
pub const ENCODING_STANDARD_PROPERTY_NAME: &str = "encodingStandard";
pub const NAMESPACE_PROPERTY_NAME: &str = "namespace";
pub const IS_DEPRECATED_PROPERTY_NAME: &str = "isDeprecated";
pub const MAX_CARDINALITY_PROPERTY_NAME: &str = "maxCardinality";
pub const ALLOWS_DUPLICATE_VALUES_PROPERTY_NAME: &str = "allowsDuplicateValues";
