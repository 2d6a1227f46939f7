use crate::composer::escape_html;
use crate::document::ListingContent;

/// One fixed block of the premium template.
pub struct Section {
    pub name: &'static str,
    pub render: fn(&ListingContent, &mut String),
}

/// Template sections in output order. Every section is emitted for every document, so the
/// skeleton never depends on which fields the model filled in.
pub const SECTIONS: &[Section] = &[
    Section {
        name: "hero",
        render: hero,
    },
    Section {
        name: "seo-title",
        render: seo_title,
    },
    Section {
        name: "badges",
        render: badges,
    },
    Section {
        name: "about",
        render: about,
    },
    Section {
        name: "details",
        render: details,
    },
    Section {
        name: "condition",
        render: condition,
    },
    Section {
        name: "contents",
        render: contents,
    },
    Section {
        name: "collector-points",
        render: collector_points,
    },
    Section {
        name: "nostalgia",
        render: nostalgia,
    },
    Section {
        name: "cta",
        render: cta,
    },
];

fn list_items(items: &[String], item_class: Option<&str>, out: &mut String) {
    for item in items {
        match item_class {
            Some(class) => out.push_str(&format!("<li class=\"{}\">", class)),
            None => out.push_str("<li>"),
        }
        out.push_str(&escape_html(item));
        out.push_str("</li>\n");
    }
}

fn hero(content: &ListingContent, out: &mut String) {
    let hero = &content.hero;
    out.push_str("<header class=\"hero section\">\n");
    out.push_str(&format!(
        "<span class=\"hero-era\">{}</span>\n",
        escape_html(&hero.era_tag)
    ));
    out.push_str(&format!(
        "<h1 class=\"hero-title\">{}</h1>\n",
        escape_html(&hero.main_title)
    ));
    out.push_str(&format!(
        "<p class=\"hero-subtitle\">{}</p>\n",
        escape_html(&hero.sub_title)
    ));
    out.push_str(&format!(
        "<p class=\"hero-author\">{}</p>\n",
        escape_html(&hero.author_line)
    ));
    out.push_str("</header>\n");
}

fn seo_title(content: &ListingContent, out: &mut String) {
    out.push_str(&format!(
        "<section class=\"seo section\">\n<h2 class=\"seo-title\">{}</h2>\n</section>\n",
        escape_html(&content.seo.ebay_title)
    ));
}

fn badges(content: &ListingContent, out: &mut String) {
    out.push_str("<ul class=\"badges\">\n");
    list_items(&content.badges, Some("badge"), out);
    out.push_str("</ul>\n");
}

fn about(content: &ListingContent, out: &mut String) {
    out.push_str("<section class=\"about section\">\n");
    out.push_str("<h2 class=\"section-title\">About This Item</h2>\n");
    for paragraph in &content.about.paragraphs {
        out.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
    }
    out.push_str("</section>\n");
}

fn details(content: &ListingContent, out: &mut String) {
    out.push_str("<section class=\"details section\">\n");
    out.push_str("<h2 class=\"section-title\">Item Details</h2>\n");
    out.push_str("<dl class=\"details-list\">\n");
    for item in &content.details.items {
        out.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape_html(&item.label),
            escape_html(&item.value)
        ));
    }
    out.push_str("</dl>\n</section>\n");
}

fn condition(content: &ListingContent, out: &mut String) {
    let condition = &content.condition;
    out.push_str("<section class=\"condition section\">\n");
    out.push_str("<h2 class=\"section-title\">Condition</h2>\n");
    out.push_str("<table class=\"condition-table\">\n<tbody>\n");
    out.push_str(&format!(
        "<tr><th>Overall</th><td>{}</td></tr>\n",
        escape_html(&condition.overall)
    ));
    for component in &condition.components {
        out.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            escape_html(&component.part),
            escape_html(&component.status)
        ));
    }
    out.push_str("</tbody>\n</table>\n</section>\n");
}

fn contents(content: &ListingContent, out: &mut String) {
    out.push_str("<section class=\"contents section\">\n");
    out.push_str("<h2 class=\"section-title\">What's Included</h2>\n");
    out.push_str("<ul class=\"contents-list\">\n");
    list_items(&content.contents, None, out);
    out.push_str("</ul>\n</section>\n");
}

fn collector_points(content: &ListingContent, out: &mut String) {
    out.push_str("<section class=\"collector section\">\n");
    out.push_str("<h2 class=\"section-title\">Collector Notes</h2>\n");
    out.push_str("<ul class=\"collector-list\">\n");
    list_items(&content.collector_points, None, out);
    out.push_str("</ul>\n</section>\n");
}

fn nostalgia(content: &ListingContent, out: &mut String) {
    out.push_str(&format!(
        "<section class=\"nostalgia section\">\n<h2 class=\"nostalgia-title\">{}</h2>\n<p class=\"nostalgia-text\">{}</p>\n</section>\n",
        escape_html(&content.nostalgia.title),
        escape_html(&content.nostalgia.text)
    ));
}

fn cta(content: &ListingContent, out: &mut String) {
    out.push_str(&format!(
        "<footer class=\"cta section\">\n<p class=\"cta-headline\">{}</p>\n<p class=\"cta-sub\">{}</p>\n</footer>\n",
        escape_html(&content.cta.headline),
        escape_html(&content.cta.sub)
    ));
}
