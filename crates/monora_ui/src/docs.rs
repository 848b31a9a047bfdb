//! Human-readable documentation attached to the manifest.

use crate::ComponentKind;

pub(crate) const TITLE: &str = "Monora Design System";
pub(crate) const DESCRIPTION: &str =
    "Tech-forward component styling toolkit built on Rust, Leptos, and utility-class CSS";
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const DARK_MODE_DETECTION: &str = "prefers-color-scheme: dark";

pub(crate) struct KindDocs {
    pub summary: &'static str,
    pub props: &'static [(&'static str, &'static str)],
    pub example: Option<&'static str>,
}

const CARD_PROPS: &[(&str, &str)] = &[("layout_class", "Additional CSS classes")];

pub(crate) fn kind_docs(kind: ComponentKind) -> KindDocs {
    match kind {
        ComponentKind::Button => KindDocs {
            summary: "Action button with emphasis variants and sizes",
            props: &[
                ("variant", "Style variant (default: primary)"),
                ("size", "Button size (default: md)"),
                ("full_width", "Span full width of container"),
                ("disabled", "Disabled state"),
            ],
            example: Some(
                "<Button variant=ButtonVariant::Primary size=ButtonSize::Md>\n    \"Click Me\"\n</Button>",
            ),
        },
        ComponentKind::Input => KindDocs {
            summary: "Labeled text field with error and helper text",
            props: &[
                ("label", "Label text above input"),
                ("placeholder", "Placeholder text (pass-through)"),
                ("error", "Error message display"),
                ("helper_text", "Helper text below input"),
                ("id", "HTML id attribute (default: derived from label)"),
            ],
            example: Some(
                "<Input\n    label=\"Email\"\n    error=\"Invalid email\"\n    attr:placeholder=\"your@email.com\"\n/>",
            ),
        },
        ComponentKind::Select => KindDocs {
            summary: "Labeled choice field over a non-empty option list",
            props: &[
                ("label", "Label text"),
                ("options", "Non-empty list of SelectOption { value, label }"),
                ("error", "Error message"),
                ("helper_text", "Helper text below select"),
            ],
            example: Some(
                "<Select\n    label=\"Choose\"\n    options=vec![SelectOption::new(\"1\", \"Option 1\")]\n/>",
            ),
        },
        ComponentKind::Card => KindDocs {
            summary: "Card surface composed from independent header, title, description, and content regions",
            props: CARD_PROPS,
            example: Some(
                "<Card>\n    <CardHeader>\n        <CardTitle>\"Title\"</CardTitle>\n        <CardDescription>\"Subtitle\"</CardDescription>\n    </CardHeader>\n    <CardContent>\"Content here\"</CardContent>\n</Card>",
            ),
        },
        ComponentKind::CardHeader => KindDocs {
            summary: "Card header region",
            props: CARD_PROPS,
            example: None,
        },
        ComponentKind::CardTitle => KindDocs {
            summary: "Card title heading",
            props: CARD_PROPS,
            example: None,
        },
        ComponentKind::CardDescription => KindDocs {
            summary: "Card subtitle paragraph",
            props: CARD_PROPS,
            example: None,
        },
        ComponentKind::CardContent => KindDocs {
            summary: "Card body region",
            props: CARD_PROPS,
            example: None,
        },
        ComponentKind::Badge => KindDocs {
            summary: "Inline status label",
            props: &[("variant", "Color variant (default: primary)")],
            example: Some("<Badge variant=BadgeVariant::Primary>\"Label\"</Badge>"),
        },
        ComponentKind::Alert => KindDocs {
            summary: "Status banner with an optional title",
            props: &[
                ("variant", "Alert type (default: info)"),
                ("title", "Optional title"),
            ],
            example: Some(
                "<Alert variant=AlertVariant::Success title=\"Success\">\n    \"Operation completed successfully\"\n</Alert>",
            ),
        },
        ComponentKind::Container => KindDocs {
            summary: "Centered container with responsive max-width",
            props: &[("size", "Container max-width (default: max)")],
            example: None,
        },
        ComponentKind::Grid => KindDocs {
            summary: "Responsive grid with automatic column wrapping",
            props: &[("cols", "Number of columns (default: auto)")],
            example: None,
        },
        ComponentKind::Flex => KindDocs {
            summary: "Flex row or column with alignment and gap",
            props: &[
                ("direction", "Main axis (default: row)"),
                ("align", "Cross-axis alignment (default: center)"),
                ("justify", "Main-axis justification (default: start)"),
                ("gap", "Gap between children (default: md)"),
            ],
            example: None,
        },
        ComponentKind::Stack => KindDocs {
            summary: "Vertical stack of children",
            props: &[("gap", "Gap between children (default: md)")],
            example: None,
        },
        ComponentKind::Text => KindDocs {
            summary: "Body text with size, weight, and color roles",
            props: &[
                ("size", "Text size (default: base)"),
                ("weight", "Font weight (default: normal)"),
                ("color", "Color role (default: foreground)"),
                ("truncate", "Clip to a single line"),
            ],
            example: None,
        },
        ComponentKind::Section => KindDocs {
            summary: "Page section with vertical rhythm and tinted backgrounds",
            props: &[
                ("variant", "Background (default: default)"),
                ("size", "Vertical padding (default: md)"),
            ],
            example: None,
        },
        ComponentKind::Divider => KindDocs {
            summary: "Horizontal or vertical rule",
            props: &[("orientation", "Axis (default: horizontal)")],
            example: None,
        },
        ComponentKind::BadgeGroup => KindDocs {
            summary: "Wrapping row of badges",
            props: &[],
            example: None,
        },
    }
}

pub(crate) const UTILITIES: &[(&str, &[(&str, &str)])] = &[
    (
        "flexbox",
        &[
            ("flex-center", "Flex center both axes"),
            ("flex-between", "Flex space-between"),
            ("flex-col-center", "Flex column center"),
        ],
    ),
    (
        "spacing",
        &[
            ("section", "py-12 px-4 md:px-6"),
            ("section-sm", "py-6 px-4 md:px-6"),
            ("section-lg", "py-20 px-4 md:px-6"),
        ],
    ),
    (
        "containers",
        &[
            ("container-sm", "max-w-2xl"),
            ("container-md", "max-w-4xl"),
            ("container-max", "max-w-7xl"),
        ],
    ),
    (
        "grids",
        &[
            ("grid-2", "2 column responsive grid"),
            ("grid-3", "3 column responsive grid"),
            ("grid-4", "4 column responsive grid"),
            ("grid-auto", "Auto column grid"),
        ],
    ),
    (
        "effects",
        &[
            ("hover-lift", "Hover shadow and scale effect"),
            ("hover-dim", "Hover opacity reduction"),
            ("focus-ring", "Focus outline ring"),
        ],
    ),
];

pub(crate) const BEST_PRACTICES: &[&str] = &[
    "Use semantic color tokens instead of raw colors",
    "Prefer the spacing scale over arbitrary values",
    "Use gap classes for spacing between flex and grid children",
    "Use responsive prefixes (md:, lg:) for mobile-first layouts",
    "Apply the focus-ring utility to interactive elements",
    "Keep to three to five colors per design",
    "Use aria labels and semantic HTML for accessibility",
];

pub(crate) const ACCESSIBILITY: &[(&str, &str)] = &[
    ("contrast", "WCAG AA compliant color contrasts"),
    ("focus", "All interactive elements have visible focus states"),
    ("semantic", "Semantic HTML used throughout components"),
    ("aria-labels", "Proper ARIA labels for interactive elements"),
    ("dark-mode", "Full dark mode support for reduced eye strain"),
];
