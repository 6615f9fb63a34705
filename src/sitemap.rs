use chrono::Utc;

use crate::models::domain::Topic;

/// Client-side routes that exist regardless of content.
pub const STATIC_ROUTES: [&str; 7] = [
    "/",
    "/privacy-policy",
    "/construction",
    "/about",
    "/discussion_forum",
    "/disclaimer",
    "/login",
];

/// Static routes plus one detail route per topic.
pub fn routes(topics: &[Topic]) -> Vec<String> {
    let mut routes: Vec<String> = STATIC_ROUTES.iter().map(|r| r.to_string()).collect();
    routes.extend(
        topics
            .iter()
            .map(|t| format!("/description/{}/{}", t.sub_category, t.id)),
    );
    routes
}

pub fn render_xml(routes: &[String], base_url: &str) -> String {
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let base_url = base_url.trim_end_matches('/');

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for route in routes {
        let priority = if route == "/" { "1.0" } else { "0.8" };
        xml.push_str(&format!(
            "  <url>\n    <loc>{}{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            base_url, route, date, priority
        ));
    }

    xml.push_str("</urlset>");
    xml
}

pub fn render_txt(routes: &[String], base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let mut txt = String::from("Sitemap URLs:\n\n");
    for route in routes {
        txt.push_str(&format!("{}{}\n", base_url, route));
    }
    txt
}
