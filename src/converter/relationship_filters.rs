//! Views over a document's relationship list used to derive `hasFiles`.
//!
//! Plain linear filters; results follow the document's relationship order.

use crate::models_spdx::{Document, Package, Relationship, RelationshipType};

/// `package CONTAINS file` relationships.
pub fn find_package_contains_file_relationships<'a>(
    document: &'a Document,
    package: &'a Package,
) -> impl Iterator<Item = &'a Relationship> + 'a {
    document.relationships.iter().filter(move |relationship| {
        relationship.relationship_type == RelationshipType::Contains
            && relationship.spdx_element_id == package.spdx_id
            && relationship
                .related_id()
                .is_some_and(|id| document.is_file(id))
    })
}

/// `file CONTAINED_BY package` relationships.
pub fn find_file_contained_by_package_relationships<'a>(
    document: &'a Document,
    package: &'a Package,
) -> impl Iterator<Item = &'a Relationship> + 'a {
    document.relationships.iter().filter(move |relationship| {
        relationship.relationship_type == RelationshipType::ContainedBy
            && relationship.related_id() == Some(package.spdx_id.as_str())
            && document.is_file(&relationship.spdx_element_id)
    })
}

/// Ids of the files a package holds: contained ids first, then containing
/// ids. Duplicates are kept.
pub fn package_file_ids(document: &Document, package: &Package) -> Vec<String> {
    let contains = find_package_contains_file_relationships(document, package)
        .filter_map(|relationship| relationship.related_id().map(str::to_string));
    let contained_by = find_file_contained_by_package_relationships(document, package)
        .map(|relationship| relationship.spdx_element_id.clone());
    contains.chain(contained_by).collect()
}
