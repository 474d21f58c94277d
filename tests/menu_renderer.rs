use pushkind_pagination::{MenuRenderer, Pagination, Renderer};

#[test]
fn test_render_two_pages() {
    let renderer = MenuRenderer::new("prev", "next");
    let pagination = Pagination::builder(100)
        .current_page(1)
        .items_per_page(50)
        .build();

    assert_eq!(
        renderer.render(&pagination).unwrap(),
        "<ul class=\"pagination\"><li class=\"current\"><span>1</span></li>\
         <li class=\"page\"><a href=\"page/2\">2</a></li></ul>"
    );
}

#[test]
fn test_single_page_renders_nothing() {
    let pagination = Pagination::builder(10)
        .current_page(1)
        .items_per_page(50)
        .build();

    assert_eq!(pagination.page_count(), 1);
    assert_eq!(MenuRenderer::default().render(&pagination).unwrap(), "");
    assert_eq!(pagination.to_string(), "");
}

#[test]
fn test_no_pages_renders_nothing() {
    let pagination = Pagination::builder(100).current_page(0).build();
    assert_eq!(pagination.render().unwrap(), "");
}

#[test]
fn test_previous_and_next_links() {
    let pagination = Pagination::builder(200)
        .current_page(7)
        .items_per_page(10)
        .build();

    let markup = pagination.render().unwrap();
    assert!(
        markup.starts_with("<ul class=\"pagination\"><li><a href=\"page/6\">Previous</a></li>")
    );
    assert!(markup.ends_with("<li><a href=\"page/8\">Next</a></li></ul>"));
    assert!(markup.contains("<li class=\"current\"><span>7</span></li>"));

    let relabelled = pagination.with_renderer(MenuRenderer::new("prev", "next"));
    assert_ne!(pagination.to_string(), relabelled.to_string());
    assert!(relabelled.to_string().contains(">prev</a>"));
}

#[test]
fn test_custom_labels_survive_current_page_change() {
    let pagination = Pagination::builder(200)
        .items_per_page(10)
        .build()
        .with_renderer(MenuRenderer::new("prev", "next"))
        .with_current_page(7);

    let markup = pagination.render().unwrap();
    assert!(markup.starts_with("<ul class=\"pagination\"><li><a href=\"page/6\">prev</a></li>"));
    assert!(markup.ends_with("<li><a href=\"page/8\">next</a></li></ul>"));
    assert!(markup.contains("<li class=\"current\"><span>7</span></li>"));
}
