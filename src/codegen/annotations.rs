//! Annotation comments above generated declarations

use crate::formatter::Formatter;
use crate::method::Method;

/// Write `// @a @b(...)` on its own line; nothing when unannotated
pub fn dump_annotations(method: &Method, out: &mut Formatter) {
    let annotations = method.annotations();
    if annotations.is_empty() {
        return;
    }

    out.push("// ");
    out.join(annotations, " ", |out, annotation| annotation.dump(out));
    out.push("\n");
}
