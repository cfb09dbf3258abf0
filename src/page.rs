use crate::batch::{render_cell, CellRequest};
use crate::fragment::util::html_escape;
use crate::registry::filled_style;

/// Wrap a set of cells in a standalone HTML document for previewing.
///
/// Inputs holding a value pick up the filled style through a small inline
/// script, the same way the capture page highlights completed fields.
pub fn wrap_preview_page(title: &str, cells: &[CellRequest]) -> String {
    let title = html_escape(title);
    let rows: Vec<String> = cells
        .iter()
        .map(|c| {
            format!(
                r#"    <tr>
      <td class="concept">{id}</td>
      <td>{cell}</td>
    </tr>"#,
                id = html_escape(&c.concept_id),
                cell = render_cell(c),
            )
        })
        .collect();
    let rows = rows.join("\n");

    format!(
        r##"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: system-ui, sans-serif; font-size: 12px; margin: 16px; }}
  table {{ border-collapse: collapse; }}
  th, td {{ border: 1px solid #ddd; padding: 4px 8px; text-align: center; }}
  td.concept {{ text-align: left; color: #555; }}
  .input-aprovechamiento-nueva.filled {{ {filled} }}
</style>
</head>
<body>
<h1>{title}</h1>
<table>
  <thead>
    <tr><th>Concepto</th><th>Alumnos</th></tr>
  </thead>
  <tbody>
{rows}
  </tbody>
</table>
<script>
  document.querySelectorAll('.input-aprovechamiento-nueva').forEach(function (el) {{
    var mark = function () {{ el.classList.toggle('filled', el.value !== ''); }};
    el.addEventListener('input', mark);
    mark();
  }});
</script>
</body>
</html>"##,
        title = title,
        filled = filled_style(),
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_cell() {
        let cells = vec![
            CellRequest::new("10").with_values("1", "2"),
            CellRequest::new("11"),
        ];
        let html = wrap_preview_page("Aprovechamiento", &cells);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches(r#"<td class="concept">10</td>"#).count(), 1);
        assert_eq!(html.matches(r#"<td class="concept">11</td>"#).count(), 1);
        assert_eq!(html.matches("aprovechamiento-pair-horizontal").count(), 2);
        assert!(html.contains("border-color: #4caf50"));
    }

    #[test]
    fn title_is_escaped() {
        let html = wrap_preview_page("<b>x</b>", &[]);
        assert!(html.contains("<title>&lt;b&gt;x&lt;/b&gt;</title>"));
        assert!(!html.contains("<b>x</b>"));
    }
}
