//! Printable HTML for a set's double-sided sheets.
//!
//! One page per sheet: fronts show set name, card name and `number/total`;
//! backs show the Stronghold TCG logo. Each page is a 3×3 grid.

use stronghold_core::print::{PrintPlan, PrintedFace, PrintedSheet};

const PRINT_CSS: &str = r#"
@page { size: letter; margin: 0.25in; }
body { margin: 0; font-family: system-ui, sans-serif; }
.sheet { display: grid; grid-template-columns: repeat(3, 2.5in); grid-auto-rows: 3.5in;
         gap: 0.1in; justify-content: center; page-break-after: always; break-after: page; }
.sheet:last-child { page-break-after: auto; break-after: auto; }
.card { box-sizing: border-box; border: 1px solid #4b5563; border-radius: 8px; overflow: hidden;
        print-color-adjust: exact; -webkit-print-color-adjust: exact; }
.front { display: flex; flex-direction: column; justify-content: space-between;
         align-items: center; background: #fff; }
.front .set { font-weight: 700; font-size: 1.05rem; padding-top: 0.8rem; color: #1f2937; }
.front .name { font-weight: 500; font-size: 1.1rem; text-align: center; padding: 0 0.8rem;
               overflow-wrap: anywhere; color: #111827; }
.front .label { align-self: flex-end; padding: 0.6rem; font-size: 0.85rem; color: #4b5563; }
.back { display: flex; flex-direction: column; justify-content: center; align-items: center;
        color: #fff; background: linear-gradient(135deg, #1e3a8a, #581c87); }
.back .title { font-size: 2rem; font-weight: 700; margin-bottom: 0.6rem; }
.back .subtitle { font-size: 1.4rem; font-weight: 600; }
"#;

/// Escape text for HTML element content and quoted attribute values.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn render_front(set_name: &str, face: &PrintedFace) -> String {
    format!(
        "<div class=\"card front\"><div class=\"set\">{}</div><div class=\"name\">{}</div><div class=\"label\">{}</div></div>",
        escape_html(set_name),
        escape_html(&face.name),
        escape_html(&face.label),
    )
}

fn render_back() -> &'static str {
    "<div class=\"card back\"><div class=\"title\">Stronghold</div><div class=\"subtitle\">TCG</div></div>"
}

/// Full HTML document for `plan`.
pub(crate) fn render(plan: &PrintPlan) -> String {
    let mut body = String::new();
    for sheet in &plan.sheets {
        match sheet {
            PrintedSheet::Front { page, cards } => {
                body.push_str(&format!("<section class=\"sheet fronts\" data-page=\"{page}\">"));
                for face in cards {
                    body.push_str(&render_front(&plan.set_name, face));
                }
            },
            PrintedSheet::Back { page, count, .. } => {
                body.push_str(&format!("<section class=\"sheet backs\" data-page=\"{page}\">"));
                for _ in 0..*count {
                    body.push_str(render_back());
                }
            },
        }
        body.push_str("</section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title} - print</title>\n<style>{PRINT_CSS}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(&plan.set_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(name: &str, number: i32, total: i64) -> PrintedFace {
        PrintedFace { name: name.to_owned(), number, label: format!("{number}/{total}") }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape_html("Pikachu"), "Pikachu");
    }

    #[test]
    fn test_render_escapes_card_text() {
        let plan = PrintPlan {
            set_id: "s".to_owned(),
            set_name: "<Evil> Set".to_owned(),
            total: 1,
            card_count: 1,
            sheets: vec![
                PrintedSheet::Front { page: 0, cards: vec![face("<script>x</script>", 1, 1)] },
                PrintedSheet::Back { page: 1, count: 1, remainder: true },
            ],
        };
        let html = render(&plan);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("&lt;Evil&gt; Set"));
        assert!(html.contains("1/1"));
    }

    #[test]
    fn test_render_one_back_per_covered_card() {
        let plan = PrintPlan {
            set_id: "s".to_owned(),
            set_name: "Ten".to_owned(),
            total: 10,
            card_count: 10,
            sheets: vec![
                PrintedSheet::Front {
                    page: 0,
                    cards: (1..=9).map(|n| face(&format!("C{n}"), n, 10)).collect(),
                },
                PrintedSheet::Back { page: 1, count: 9, remainder: false },
                PrintedSheet::Front { page: 2, cards: vec![face("C10", 10, 10)] },
                PrintedSheet::Back { page: 3, count: 1, remainder: true },
            ],
        };
        let html = render(&plan);
        assert_eq!(html.matches("class=\"card back\"").count(), 10);
        assert_eq!(html.matches("class=\"card front\"").count(), 10);
        assert_eq!(html.matches("<section").count(), 4);
        assert!(html.contains(">Stronghold<") && html.contains(">TCG<"));
    }
}
