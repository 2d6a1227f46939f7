use std::collections::HashSet;

lazy_static! {
    pub static ref CSS_PROPERTIES: HashSet<&'static str> = hashset! {
        // color and background
        "background",
        "background-color",
        "color",
        "opacity",

        // typography
        "font-family",
        "font-size",
        "font-style",
        "font-variant",
        "font-weight",
        "letter-spacing",
        "line-height",
        "text-align",
        "text-decoration",
        "text-shadow",
        "text-transform",
        "white-space",
        "word-spacing",

        // box model
        "border",
        "border-bottom",
        "border-collapse",
        "border-color",
        "border-left",
        "border-radius",
        "border-right",
        "border-spacing",
        "border-style",
        "border-top",
        "border-width",
        "box-shadow",
        "box-sizing",
        "height",
        "margin",
        "margin-bottom",
        "margin-left",
        "margin-right",
        "margin-top",
        "max-width",
        "min-height",
        "min-width",
        "outline",
        "padding",
        "padding-bottom",
        "padding-left",
        "padding-right",
        "padding-top",
        "width",

        // layout
        "align-items",
        "column-gap",
        "display",
        "flex",
        "flex-direction",
        "flex-wrap",
        "gap",
        "grid-template-columns",
        "justify-content",
        "row-gap",

        // lists and tables
        "list-style",
        "list-style-position",
        "list-style-type",
        "vertical-align",
    };
}
