//! Identifier derivation.
//!
//! Each discovered file gets a C identifier derived from its relative path:
//! path separators, dots, and hyphens become underscores, and the configured
//! namespace prefix goes in front. `libdec/core/base.js` with the default
//! prefix becomes `jsc_libdec_core_base_js`.

use std::collections::HashMap;

use crate::error::{EmbedError, EmbedResult};
use crate::options::EmbedOptions;
use crate::scan::InputFile;

/// Derive the array identifier for a normalized relative name.
pub fn identifier_for(name: &str, prefix: &str) -> String {
    let mut ident = String::with_capacity(prefix.len() + name.len());
    ident.push_str(prefix);
    for ch in name.chars() {
        match ch {
            '/' | '\\' | '.' | '-' => ident.push('_'),
            other => ident.push(other),
        }
    }
    ident
}

/// Derive identifiers for all files, in order, rejecting collisions.
///
/// The substitution is not injective (`a-b.js` and `a.b.js` both become
/// `a_b_js`), and a duplicate identifier would only surface as a compile
/// error in the host build. Refuse up front and name both source paths.
pub fn assign(files: &[InputFile], options: &EmbedOptions) -> EmbedResult<Vec<String>> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut idents = Vec::with_capacity(files.len());

    for file in files {
        let name = file.normalized_name();
        let ident = identifier_for(&name, &options.prefix);
        if let Some(first) = seen.get(&ident) {
            return Err(EmbedError::DuplicateIdentifier {
                ident,
                first: first.clone(),
                second: name,
            });
        }
        seen.insert(ident.clone(), name);
        idents.push(ident);
    }

    Ok(idents)
}
