//! Rendering of the generated C fragment.
//!
//! The output is a sequence of `const unsigned char` array literals, one per
//! input file, followed by a size macro and a static table mapping each
//! file's relative path to its array. The literal syntax (tab indentation,
//! decimal byte values, 32 values per line, a trailing sentinel `0`,
//! designated initializers in the table) is what the host build consumes; a
//! given input tree and option set always renders byte-identical text.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{EmbedError, EmbedResult};
use crate::ident;
use crate::options::EmbedOptions;
use crate::scan::{self, InputFile};

/// Byte values emitted per line inside an array literal.
pub const BYTES_PER_LINE: usize = 32;

/// Render one file's contents as a named array literal.
///
/// The declared size is `bytes.len() + 1`: every array carries one sentinel
/// `0` after the payload, so even an empty input yields a one-element,
/// NUL-terminated array. The sentinel is appended, never substituted, so
/// interior zero bytes in the payload survive.
pub fn render_array(out: &mut impl Write, ident: &str, bytes: &[u8]) -> EmbedResult<()> {
    write!(out, "const unsigned char {}[{}] = {{\n\t", ident, bytes.len() + 1)?;
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 && i % BYTES_PER_LINE == 0 {
            write!(out, "\n\t")?;
        }
        write!(out, "{}, ", byte)?;
    }
    write!(out, " 0\n}};\n\n")?;
    Ok(())
}

/// Render the size macro and the static lookup table.
///
/// Entries appear in the same order the arrays were emitted; names always
/// use forward slashes.
pub fn render_table(
    out: &mut impl Write,
    files: &[InputFile],
    idents: &[String],
    options: &EmbedOptions,
) -> EmbedResult<()> {
    writeln!(out, "#define {} ({})", options.size_macro, files.len())?;
    writeln!(out)?;
    writeln!(
        out,
        "const {} {}[{}] = {{",
        options.table_type, options.table_name, options.size_macro
    )?;
    for (file, ident) in files.iter().zip(idents) {
        writeln!(
            out,
            "\t{{ .name = \"{}\", .code = (const char *){} }},",
            file.normalized_name(),
            ident
        )?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

/// Run the whole pipeline: discover, derive identifiers, read and render
/// each file, then render the table. Returns the number of embedded files.
///
/// Single linear pass; the first failure aborts generation and any partial
/// output already written to `out` must be discarded by the caller.
pub fn generate(root: &Path, options: &EmbedOptions, out: &mut impl Write) -> EmbedResult<usize> {
    let files = scan::discover(root, options)?;
    let idents = ident::assign(&files, options)?;

    for (file, ident) in files.iter().zip(&idents) {
        let bytes = fs::read(&file.abs_path)
            .map_err(|source| EmbedError::Read { path: file.abs_path.clone(), source })?;
        render_array(out, ident, &bytes)?;
    }

    render_table(out, &files, &idents, options)?;
    Ok(files.len())
}
