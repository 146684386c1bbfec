//! HTML markup for a render list

use crate::render::RenderList;

/// Serialize `list` as the `<ul class="pagination">` fragment written into the container
pub fn to_html(list: &RenderList) -> String {
    let mut html = String::with_capacity(64 + list.items.len() * 48);

    html.push_str("<ul class=\"pagination");
    if !list.sizing_class.is_empty() {
        html.push(' ');
        push_escaped(&mut html, &list.sizing_class);
    }
    html.push_str("\">");

    for item in &list.items {
        html.push_str("<li");
        if let Some(class) = item.class_name() {
            html.push_str(" class=\"");
            html.push_str(&class);
            html.push('"');
        }
        html.push_str("><a href=\"#\">");
        push_escaped(&mut html, &item.label);
        html.push_str("</a></li>");
    }

    html.push_str("</ul>");
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
