#[cfg(test)]
mod tests {
    use crate::logging::capture::CapturedLogs;
    use crate::tools::map::utils::resolve_link;
    use crate::tools::map::*;
    use url::Url;

    const ROOT: &str = "https://www.jamieoliver.com/recipes/category/ingredient/";
    const CATEGORY: &str = "https://www.jamieoliver.com/recipes/vegetables-recipes/";

    fn category_page(script: &str) -> String {
        format!(
            r#"<html><body>
                <section id="recipe-subcat-listing">
                    <div class="recipe-block"><a href="/ignored/">ignored</a></div>
                    {script}
                </section>
            </body></html>"#
        )
    }

    #[test]
    fn test_map_categories_basic() {
        let html = r#"
            <html><body>
                <section id="recipe-cat-listing">
                    <div class="recipe-block"><a href="https://www.jamieoliver.com/recipes/apple-recipes/">Apple</a></div>
                    <div class="recipe-block"><a href="/recipes/beef-recipes/">Beef</a><a href="/other/">x</a></div>
                    <div class="recipe-block"><span>no link</span></div>
                    <div class="recipe-block"><a href="javascript:void(0)">bad</a></div>
                    <div class="recipe-block"><a href="/recipes/beef-recipes/">Beef again</a></div>
                </section>
                <div class="recipe-block"><a href="/recipes/outside/">outside</a></div>
            </body></html>
        "#;

        let links = map_categories_html(html, ROOT);
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.jamieoliver.com/recipes/apple-recipes/",
                "https://www.jamieoliver.com/recipes/beef-recipes/",
            ]
        );
    }

    #[test]
    fn test_map_categories_missing_section() {
        let html = r#"<html><body><div class="recipe-block"><a href="/x/">x</a></div></body></html>"#;
        assert!(map_categories_html(html, ROOT).is_empty());
    }

    #[test]
    fn test_map_recipe_urls_preserves_order() {
        let html = category_page(
            r#"<script type="application/ld+json">
            {
                "@context": "https://schema.org",
                "@type": "ItemList",
                "itemListElement": [
                    {"@type": "ListItem", "position": 1, "url": "https://www.jamieoliver.com/recipes/vegetables-recipes/b/"},
                    {"@type": "ListItem", "position": 2, "url": "https://www.jamieoliver.com/recipes/vegetables-recipes/a/"},
                    {"@type": "ListItem", "position": 3},
                    {"@type": "ListItem", "position": 4, "url": "/recipes/vegetables-recipes/c/"}
                ]
            }
            </script>"#,
        );

        let urls: Vec<String> = map_recipe_urls_html(&html, CATEGORY)
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://www.jamieoliver.com/recipes/vegetables-recipes/b/",
                "https://www.jamieoliver.com/recipes/vegetables-recipes/a/",
                "https://www.jamieoliver.com/recipes/vegetables-recipes/c/",
            ]
        );
    }

    #[test]
    fn test_map_recipe_urls_no_script() {
        let html = category_page("");
        let logs = CapturedLogs::default();
        let refs = tracing::subscriber::with_default(logs.subscriber(), || {
            map_recipe_urls_html(&html, CATEGORY)
        });

        assert!(refs.is_empty());
        let warnings = logs.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("JSON-LD script not found"));
        assert!(warnings[0].contains(CATEGORY));
    }

    #[test]
    fn test_map_recipe_urls_missing_section() {
        let html = r#"<html><body>
            <script type="application/ld+json">{"itemListElement": [{"url": "https://x.test/r/"}]}</script>
        </body></html>"#;
        let logs = CapturedLogs::default();
        let refs = tracing::subscriber::with_default(logs.subscriber(), || {
            map_recipe_urls_html(html, CATEGORY)
        });

        assert!(refs.is_empty());
        let warnings = logs.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("recipe section not found"));
        assert!(warnings[0].contains(CATEGORY));
    }

    #[test]
    fn test_map_recipe_urls_malformed_json() {
        let html = category_page(
            r#"<script type="application/ld+json">{"itemListElement": [</script>"#,
        );
        assert!(map_recipe_urls_html(&html, CATEGORY).is_empty());
    }

    #[test]
    fn test_map_recipe_urls_graph_wrapper() {
        let html = category_page(
            r#"<script type="application/ld+json">
            [{"@type": "WebPage"}, {"@graph": [{"@type": "ItemList", "itemListElement": [
                {"item": {"url": "https://x.test/r/1/"}}
            ]}]}]
            </script>"#,
        );

        let refs = map_recipe_urls_html(&html, CATEGORY);
        assert_eq!(
            refs,
            vec![RecipeReference {
                url: "https://x.test/r/1/".to_string()
            }]
        );
    }

    #[test]
    fn test_resolve_link() {
        let base = Url::parse(ROOT).unwrap();
        assert_eq!(
            resolve_link(" \"/recipes/leek-recipes/\" ", Some(&base)).as_deref(),
            Some("https://www.jamieoliver.com/recipes/leek-recipes/")
        );
        assert_eq!(resolve_link("mailto:a@b.test", Some(&base)), None);
        assert_eq!(resolve_link("/relative/", None), None);
        assert_eq!(resolve_link("", Some(&base)), None);
    }
}
