/// UI layer: panel and tab renderers over [`AppState`](crate::state::AppState).

pub mod panels;
pub mod views;

/// Format a count with thousands separators, e.g. 54169 → "54,169".
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
