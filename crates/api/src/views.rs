//! Minimal HTML page glue.
//!
//! The POS is a small server-rendered surface; these builders keep the
//! markup in one place without pulling in a template engine.

use memocont_core::auth::Identity;
use memocont_core::reports::DailyCashReport;

/// Escapes text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head><meta charset=\"utf-8\">\
         <title>{title} - MemoCont</title></head>\n<body>\n{body}\n</body>\n</html>"
    )
}

/// Login form.
pub fn login_page() -> String {
    page(
        "Ingreso",
        "<h1>MemoCont POS</h1>\
         <form method=\"post\" action=\"/auth\">\
         <label>Usuario <input name=\"user\" required></label>\
         <label>Contraseña <input name=\"pass\" type=\"password\" required></label>\
         <button type=\"submit\">Ingresar</button>\
         </form>",
    )
}

/// Inline credential failure with a retry link.
pub fn login_error_page() -> String {
    "Usuario o contraseña incorrectos. <a href='/'>Volver a intentar</a>".to_string()
}

/// Recoverable empty-export outcome.
pub fn no_sales_page() -> String {
    "No hay ventas registradas para exportar. <a href='/pos'>Volver</a>".to_string()
}

/// POS landing page with the sale form.
pub fn pos_page(identity: &Identity) -> String {
    let body = format!(
        "<h1>Punto de Venta</h1>\
         <p>Vendedor: <strong>{user}</strong> | Sede: <strong>{branch}</strong></p>\
         <form id=\"venta\">\
         <label>DNI Cliente <input name=\"dni\"></label>\
         <label>Detalle <input name=\"detalle\" required></label>\
         <label>Método de pago <select name=\"metodo_pago\">\
         <option value=\"EFECTIVO\">EFECTIVO</option>\
         <option value=\"YAPE\">YAPE</option>\
         </select></label>\
         <label>Total <input name=\"total\" required></label>\
         <button type=\"submit\">Registrar venta</button>\
         </form>\
         <nav><a href=\"/caja\">Caja del día</a> | \
         <a href=\"/exportar\">Exportar Excel</a> | \
         <a href=\"/logout\">Salir</a></nav>",
        user = escape(&identity.username),
        branch = escape(&identity.branch),
    );
    page("POS", &body)
}

/// Daily cash report page.
pub fn caja_page(identity: &Identity, report: &DailyCashReport) -> String {
    let mut rows = String::new();
    for sale in &report.sales {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{time}</td><td>{customer}</td>\
             <td>{detail}</td><td>{method}</td><td>S/. {total}</td></tr>",
            id = sale.id,
            time = sale.recorded_at.format("%H:%M:%S"),
            customer = escape(sale.customer_label()),
            detail = escape(&sale.detail),
            method = sale.payment_method,
            total = sale.total,
        ));
    }

    let body = format!(
        "<h1>Reporte de Caja - {date}</h1>\
         <p>Vendedor: <strong>{user}</strong> | Sede: <strong>{branch}</strong></p>\
         <table border=\"1\">\
         <thead><tr><th>ID</th><th>Hora</th><th>Cliente</th>\
         <th>Detalle</th><th>Método</th><th>Total</th></tr></thead>\
         <tbody>{rows}</tbody>\
         </table>\
         <p>Efectivo: S/. {cash} | Yape: S/. {wallet} | \
         <strong>Total: S/. {grand}</strong></p>\
         <nav><a href=\"/pos\">Volver</a></nav>",
        date = report.date,
        user = escape(&identity.username),
        branch = escape(&identity.branch),
        cash = report.cash_total,
        wallet = report.wallet_total,
        grand = report.grand_total,
    );
    page("Caja", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape("Sede Norte"), "Sede Norte");
    }

    #[test]
    fn test_pos_page_escapes_identity() {
        let identity = Identity {
            username: "<script>".to_string(),
            branch: "Sede & Norte".to_string(),
        };
        let html = pos_page(&identity);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Sede &amp; Norte"));
        assert!(!html.contains("<script>"));
    }
}
