//! 富文本 HTML 白名单净化
//!
//! 帖子与评论正文是用户提交的富文本 HTML，渲染前必须经过本模块：
//! - `clean`: 只保留格式化标签白名单，丢弃脚本、事件属性与危险 URL
//! - `truncate`: 列表卡片的可见文本截断，保证输出片段标签闭合
//! - `is_blank`: 判断片段是否没有可见文本（用于提交前校验）
//!
//! 刻意不引入完整的 HTML 解析器：输入只来自站内编辑器，
//! 一个针对性的单遍扫描即可覆盖需要的标签集合。

// =========================================================
// 白名单
// =========================================================

/// 允许保留的格式化标签
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "b", "strong", "i", "em", "u", "s", "strike", "blockquote", "pre", "code", "h1",
    "h2", "ul", "ol", "li", "sub", "sup", "a", "img",
];

/// 连同子内容一起丢弃的标签
const DROP_WITH_CONTENT: &[&str] = &["script", "style"];

/// 不需要闭合的标签（截断时不入栈）
const VOID_TAGS: &[&str] = &["br", "img"];

fn allowed_attr(tag: &str, attr: &str) -> bool {
    matches!((tag, attr), ("a", "href") | ("img", "src") | ("img", "alt"))
}

/// URL 只允许 http/https/mailto 或相对路径
fn safe_url(url: &str) -> bool {
    let trimmed = url.trim();
    // 控制字符可以把 scheme 拆开绕过检查
    if trimmed.chars().any(char::is_control) {
        return false;
    }
    match trimmed.find([':', '/', '?', '#']) {
        Some(i) if trimmed.as_bytes()[i] == b':' => {
            let scheme = trimmed[..i].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

// =========================================================
// 标签扫描
// =========================================================

struct RawTag<'a> {
    /// 小写标签名
    name: String,
    /// (小写属性名, 原始属性值)
    attrs: Vec<(String, Option<&'a str>)>,
    closing: bool,
    self_closing: bool,
}

/// 从 `lt`（指向 `<`）扫描一个标签，返回标签与 `>` 之后的下标。
///
/// 返回 None 表示这里不是合法标签，`<` 应按文本处理。
fn scan_tag(src: &str, lt: usize) -> Option<(RawTag<'_>, usize)> {
    let bytes = src.as_bytes();
    let mut i = lt + 1;

    let closing = if bytes.get(i) == Some(&b'/') {
        i += 1;
        true
    } else {
        false
    };

    // 标签名必须以字母开头
    if !bytes.get(i).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    let name_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    let name = src[name_start..i].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i).copied() {
            // 标签未闭合
            None => return None,
            Some(b'>') => {
                i += 1;
                break;
            }
            Some(b'/') => {
                self_closing = true;
                i += 1;
            }
            Some(_) => {
                let attr_start = i;
                while i < bytes.len()
                    && !bytes[i].is_ascii_whitespace()
                    && !matches!(bytes[i], b'=' | b'>' | b'/')
                {
                    i += 1;
                }
                if i == attr_start {
                    i += 1;
                    continue;
                }
                let attr_name = src[attr_start..i].to_ascii_lowercase();

                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                let mut value = None;
                if bytes.get(i) == Some(&b'=') {
                    i += 1;
                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    match bytes.get(i).copied() {
                        Some(q @ (b'"' | b'\'')) => {
                            i += 1;
                            let vstart = i;
                            while i < bytes.len() && bytes[i] != q {
                                i += 1;
                            }
                            if i >= bytes.len() {
                                return None;
                            }
                            value = Some(&src[vstart..i]);
                            i += 1;
                        }
                        _ => {
                            let vstart = i;
                            while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                                i += 1;
                            }
                            value = Some(&src[vstart..i]);
                        }
                    }
                }
                attrs.push((attr_name, value));
            }
        }
    }

    Some((
        RawTag {
            name,
            attrs,
            closing,
            self_closing,
        },
        i,
    ))
}

/// 大小写无关的子串查找，返回字节下标
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() || from > h.len() - n.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// 跳过 `<script>`/`<style>` 的全部内容，返回闭合标签之后的下标
fn skip_element_content(html: &str, name: &str, from: usize) -> usize {
    let close = format!("</{name}");
    match find_ci(html, &close, from) {
        Some(pos) => html[pos..]
            .find('>')
            .map(|g| pos + g + 1)
            .unwrap_or(html.len()),
        None => html.len(),
    }
}

fn emit_tag(out: &mut String, tag: &RawTag) {
    if tag.closing {
        out.push_str("</");
        out.push_str(&tag.name);
        out.push('>');
        return;
    }
    out.push('<');
    out.push_str(&tag.name);
    for (attr, value) in &tag.attrs {
        if !allowed_attr(&tag.name, attr) {
            continue;
        }
        let Some(value) = value else { continue };
        if matches!(attr.as_str(), "href" | "src") && !safe_url(value) {
            continue;
        }
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&value.replace('"', "&quot;"));
        out.push('"');
    }
    if tag.self_closing {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

// =========================================================
// 对外接口
// =========================================================

/// 净化一段富文本 HTML。
///
/// 白名单外的标签被丢弃但其文本子内容保留；`<script>`/`<style>`
/// 连同内容一起丢弃；属性只保留 `a[href]` 与 `img[src|alt]`，
/// 且 URL 必须通过 [`safe_url`] 检查。
pub fn clean(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut i = 0;
    while i < html.len() {
        let rest = &html[i..];
        if !rest.starts_with('<') {
            let end = rest.find('<').map(|p| i + p).unwrap_or(html.len());
            out.push_str(&html[i..end]);
            i = end;
            continue;
        }
        if rest.starts_with("<!--") {
            i = html[i..]
                .find("-->")
                .map(|p| i + p + 3)
                .unwrap_or(html.len());
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            i = rest.find('>').map(|p| i + p + 1).unwrap_or(html.len());
            continue;
        }
        match scan_tag(html, i) {
            Some((tag, after)) => {
                if !tag.closing && DROP_WITH_CONTENT.contains(&tag.name.as_str()) {
                    i = skip_element_content(html, &tag.name, after);
                } else if ALLOWED_TAGS.contains(&tag.name.as_str()) {
                    emit_tag(&mut out, &tag);
                    i = after;
                } else {
                    i = after;
                }
            }
            None => {
                out.push_str("&lt;");
                i += 1;
            }
        }
    }
    out
}

/// 按可见文本截断已净化的 HTML。
///
/// 只统计标签外的文本，HTML 实体按一个字符计。超出 `max_chars`
/// 时在截断点追加 `...` 并补齐所有未闭合的标签。
pub fn truncate(html: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(html.len());
    let mut open: Vec<String> = Vec::new();
    let mut remaining = max_chars;
    let mut truncated = false;
    let mut i = 0;

    while i < html.len() {
        let rest = &html[i..];
        if rest.starts_with('<') {
            if let Some((tag, after)) = scan_tag(html, i) {
                out.push_str(&html[i..after]);
                if tag.closing {
                    if open.last().map(String::as_str) == Some(tag.name.as_str()) {
                        open.pop();
                    }
                } else if !tag.self_closing && !VOID_TAGS.contains(&tag.name.as_str()) {
                    open.push(tag.name);
                }
                i = after;
                continue;
            }
        }
        // 实体按一个可见字符处理，避免从中间截断
        let unit_len = if rest.starts_with('&') {
            rest[1..]
                .find(';')
                .filter(|&p| p <= 8)
                .map(|p| p + 2)
                .unwrap_or(1)
        } else {
            rest.chars().next().map(char::len_utf8).unwrap_or(1)
        };
        if remaining == 0 {
            truncated = true;
            break;
        }
        out.push_str(&rest[..unit_len]);
        remaining -= 1;
        i += unit_len;
    }

    if !truncated {
        return html.to_string();
    }
    out.push_str("...");
    while let Some(name) = open.pop() {
        out.push_str("</");
        out.push_str(&name);
        out.push('>');
    }
    out
}

/// 片段是否没有任何可见、非空白的文本。
///
/// `&nbsp;` 视为空白；其他实体视为可见内容。
pub fn is_blank(html: &str) -> bool {
    let mut i = 0;
    while i < html.len() {
        let rest = &html[i..];
        if rest.starts_with('<') {
            if let Some((_, after)) = scan_tag(html, i) {
                i = after;
                continue;
            }
            // 孤立的 '<' 是可见字符
            return false;
        }
        if rest.starts_with('&') {
            if let Some(p) = rest[1..].find(';').filter(|&p| p <= 8) {
                let entity = &rest[..p + 2];
                if entity.eq_ignore_ascii_case("&nbsp;") {
                    i += p + 2;
                    continue;
                }
                return false;
            }
        }
        let c = rest.chars().next().unwrap_or(' ');
        if !c.is_whitespace() {
            return false;
        }
        i += c.len_utf8();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // clean: 危险内容
    // =========================================================

    #[test]
    fn strips_script_with_content() {
        let html = "<p>before</p><script>alert('x')</script><p>after</p>";
        assert_eq!(clean(html), "<p>before</p><p>after</p>");
    }

    #[test]
    fn strips_uppercase_script() {
        let html = "safe<SCRIPT SRC=\"https://evil.example/x.js\"></SCRIPT>";
        assert_eq!(clean(html), "safe");
    }

    #[test]
    fn strips_event_handler_attributes() {
        let html = "<img src=\"/cat.png\" onerror=\"alert(1)\" alt=\"cat\">";
        assert_eq!(clean(html), "<img src=\"/cat.png\" alt=\"cat\">");
    }

    #[test]
    fn strips_javascript_urls() {
        let html = "<a href=\"javascript:alert(1)\">click</a>";
        assert_eq!(clean(html), "<a>click</a>");
        // 大小写与前导空白同样拦截
        let html = "<a href=\"  JaVaScRiPt:alert(1)\">click</a>";
        assert_eq!(clean(html), "<a>click</a>");
    }

    #[test]
    fn keeps_http_and_relative_urls() {
        let html = "<a href=\"https://example.com/a?b=1\">x</a><a href=\"/posts/3\">y</a>";
        assert_eq!(clean(html), html);
    }

    #[test]
    fn drops_unknown_tags_but_keeps_their_text() {
        let html = "<div class=\"x\">hello <span>world</span></div>";
        assert_eq!(clean(html), "hello world");
    }

    #[test]
    fn removes_comments_and_declarations() {
        let html = "a<!-- hidden -->b<!DOCTYPE html>c";
        assert_eq!(clean(html), "abc");
    }

    #[test]
    fn escapes_stray_angle_bracket() {
        assert_eq!(clean("1 < 2"), "1 &lt; 2");
    }

    // =========================================================
    // clean: 保留格式
    // =========================================================

    #[test]
    fn keeps_formatting_markup() {
        let html = "<p><b>bold</b> and <i>italic</i></p><ul><li>one</li><li>two</li></ul>";
        assert_eq!(clean(html), html);
    }

    #[test]
    fn keeps_blockquote_and_code() {
        let html = "<blockquote>quote</blockquote><pre><code>let x = 1;</code></pre>";
        assert_eq!(clean(html), html);
    }

    // =========================================================
    // truncate
    // =========================================================

    #[test]
    fn short_content_is_unchanged() {
        let html = "<p>short</p>";
        assert_eq!(truncate(html, 200), html);
    }

    #[test]
    fn long_content_is_cut_with_ellipsis() {
        let body = "x".repeat(250);
        let html = format!("<p>{body}</p>");
        let cut = truncate(&html, 200);
        assert_eq!(cut, format!("<p>{}...</p>", "x".repeat(200)));
    }

    #[test]
    fn truncation_closes_nested_tags() {
        let html = format!("<p><b>{}</b>tail</p>", "y".repeat(300));
        let cut = truncate(&html, 10);
        assert_eq!(cut, format!("<p><b>{}...</b></p>", "y".repeat(10)));
    }

    #[test]
    fn truncation_counts_text_not_markup() {
        // 标签字符不计入预算
        let html = "<p><b>ab</b><i>cd</i></p>";
        assert_eq!(truncate(html, 4), html);
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        let html = format!("<p>{}</p>", "云".repeat(20));
        let cut = truncate(&html, 5);
        assert_eq!(cut, format!("<p>{}...</p>", "云".repeat(5)));
    }

    #[test]
    fn truncation_keeps_entities_whole() {
        let html = format!("<p>{}&amp;tail</p>", "z".repeat(200));
        let cut = truncate(&html, 201);
        assert_eq!(cut, format!("<p>{}&amp;...</p>", "z".repeat(200)));
    }

    // =========================================================
    // is_blank
    // =========================================================

    #[test]
    fn empty_variants_are_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t"));
        assert!(is_blank("<p><br></p>"));
        assert!(is_blank("<p>&nbsp;&nbsp;</p>"));
    }

    #[test]
    fn visible_text_is_not_blank() {
        assert!(!is_blank("<p>hi</p>"));
        assert!(!is_blank("&amp;"));
        assert!(!is_blank("x"));
    }
}
