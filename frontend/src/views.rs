//! Page sections.
//!
//! Every view takes the [`ThemePreset`] it is built for. Colors come from the
//! preset's palette and are applied as inline styles; layout uses zoon styles.

use zoon::*;

use crate::app::PortfolioApp;
use crate::motion::{fade_up, lift_card, magnetic};
use crate::orb::tech_orb;
use crate::platform::current_year;
use crate::viewport::{ViewportTracking, cursor_glow, progress_bar};
use shared::content::{
    ABOUT_CARDS, BLOG_POSTS, CONTACT_BODY, CONTACT_HEADING, CONTACT_NOTE, ORB_CAPTION, PROJECTS, SKILLS,
    footer_copyright, github_stats_url, github_top_languages_url,
};
use shared::{BlogPost, PROFILE, Palette, Project, SECTIONS, SectionId, SiteConfig, SkillGroup, Theme, ThemePreset};

const CONTENT_MAX_WIDTH: u32 = 1100;
const HEADER_HEIGHT_PX: u32 = 64;
const HEADER_CONDENSED_HEIGHT_PX: u32 = 56;

/// The whole page for one theme. Rebuilt from scratch when the theme changes.
pub fn page(app: &PortfolioApp, theme: Theme) -> impl Element + use<> {
    let preset = ThemePreset::for_theme(theme);
    let palette = preset.palette;
    let config = app.config.clone();
    let viewport = ViewportTracking::new(&preset.motion);

    let content = Column::new()
        .s(Width::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative").style("z-index", "1"))
        .item(header(preset, &config, &viewport, app))
        .item(hero(preset, &config))
        .item(about(preset))
        .item(skills(preset))
        .item(projects(preset))
        .item(github_stats(preset, &config))
        .item(blog(preset))
        .item(contact(preset, &config))
        .item(footer(palette));

    let page = Column::new()
        .s(Width::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("data-theme", theme.as_str())
                .style("min-height", "100vh")
                .style("position", "relative")
                .style("overflow-x", "clip")
                .style("background", palette.page_background)
                .style("color", palette.text)
        })
        .item(config.ui.cursor_glow.then(|| cursor_glow(&viewport, &palette)))
        .item(progress_bar(&viewport, &palette))
        .item(content);

    viewport.scope(page)
}

// ===== BUILDING BLOCKS =====

fn contained(child: impl Element) -> impl Element {
    El::new()
        .s(Width::fill().max(CONTENT_MAX_WIDTH))
        .s(Align::new().center_x())
        .s(Padding::new().x(16))
        .child(child)
}

fn card(palette: Palette, child: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(24))
        .s(RoundedCorners::all(16))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("background", palette.surface)
                .style("border", &format!("1px solid {}", palette.surface_border))
                .style("backdrop-filter", "blur(12px)")
                .style("box-sizing", "border-box")
        })
        .child(child)
}

fn chip(palette: Palette, label: &'static str) -> impl Element {
    El::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all_max())
        .s(Font::new().size(12))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("background", palette.chip_background)
                .style("border", &format!("1px solid {}", palette.surface_border))
                .style("color", palette.text)
        })
        .child(Text::new(label))
}

fn card_title(palette: Palette, title: &'static str, size: u32) -> impl Element {
    Paragraph::new()
        .s(Font::new().size(size).weight(FontWeight::SemiBold))
        .update_raw_el(move |raw_el| raw_el.style("color", palette.text_strong))
        .content(title)
}

fn muted(palette: Palette, text: &'static str) -> impl Element {
    Paragraph::new()
        .update_raw_el(move |raw_el| raw_el.style("color", palette.text_muted))
        .content(text)
}

/// Responsive grid: as many columns of at least `min_column_px` as fit.
fn grid(min_column_px: u32, items: impl IntoIterator<Item = impl Element>) -> impl Element {
    let template = format!("repeat(auto-fill, minmax(min({min_column_px}px, 100%), 1fr))");
    Column::new()
        .s(Width::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style("display", "grid")
                .style("grid-template-columns", template.as_str())
                .style("gap", "24px")
        })
        .items(items)
}

#[derive(Clone, Copy)]
enum LinkStyle {
    Gradient,
    Outline,
    Solid,
    Underlined,
    Plain,
}

fn styled_link(palette: Palette, style: LinkStyle, label: &'static str, href: String, new_tab: bool) -> impl Element {
    Link::new()
        .label(label)
        .to(href)
        .s(Font::new().size(14).weight(FontWeight::Medium))
        .update_raw_el(move |raw_el| {
            let raw_el = if new_tab {
                raw_el.attr("target", "_blank").attr("rel", "noreferrer")
            } else {
                raw_el
            };
            let raw_el = raw_el.style("transition", "box-shadow 0.2s ease, border-color 0.2s ease");
            match style {
                LinkStyle::Gradient => raw_el
                    .style("padding", "10px 20px")
                    .style("border-radius", "16px")
                    .style("color", "#ffffff")
                    .style("background", palette.accent_gradient().as_str()),
                LinkStyle::Outline => raw_el
                    .style("padding", "6px 12px")
                    .style("border-radius", "12px")
                    .style("color", palette.text)
                    .style("border", &format!("1px solid {}", palette.surface_border)),
                LinkStyle::Solid => raw_el
                    .style("padding", "6px 12px")
                    .style("border-radius", "12px")
                    .style("color", "#ffffff")
                    .style("background", palette.accent),
                LinkStyle::Underlined => raw_el
                    .style("color", palette.text)
                    .style("text-decoration", "underline dotted")
                    .style("text-underline-offset", "4px"),
                LinkStyle::Plain => raw_el.style("color", palette.text_muted),
            }
        })
}

fn section(preset: ThemePreset, id: SectionId, body: impl Element) -> impl Element {
    let palette = preset.palette;
    let column = Column::new()
        .s(Width::fill())
        .s(Gap::new().y(32))
        .item(fade_up(
            preset.motion.fade_up,
            0.0,
            Column::new()
                .s(Gap::new().y(8))
                .item(
                    Paragraph::new()
                        .s(Font::new().size(32).weight(FontWeight::Bold))
                        .update_raw_el(move |raw_el| raw_el.style("color", palette.text_strong))
                        .content(id.label()),
                )
                .item(id.subtitle().map(|subtitle| muted(palette, subtitle))),
        ))
        .item(body);

    El::new()
        .s(Width::fill().max(CONTENT_MAX_WIDTH))
        .s(Align::new().center_x())
        .s(Padding::new().x(16).y(80))
        .update_raw_el(move |raw_el| raw_el.attr("id", id.anchor()).style("scroll-margin-top", "64px"))
        .child(column)
}

// ===== HEADER =====

fn header(preset: ThemePreset, config: &SiteConfig, viewport: &ViewportTracking, app: &PortfolioApp) -> impl Element + use<> {
    let palette = preset.palette;
    let spring = preset.motion.magnetic_spring;
    let background_signal = viewport
        .scrolled_signal()
        .map(move |scrolled| if scrolled { palette.header_scrolled } else { "transparent" });
    let border_signal = viewport.scrolled_signal().map(move |scrolled| {
        if scrolled {
            format!("1px solid {}", palette.surface_border)
        } else {
            "1px solid transparent".to_owned()
        }
    });
    let height_signal = viewport
        .scrolled_signal()
        .map(|scrolled| if scrolled { HEADER_CONDENSED_HEIGHT_PX } else { HEADER_HEIGHT_PX });

    El::new()
        .s(Width::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "sticky")
                .style("top", "0")
                .style("z-index", "50")
                .style("backdrop-filter", "blur(8px)")
                .style("transition", "background 0.2s ease, border-color 0.2s ease")
                .style_signal("background", background_signal)
                .style_signal("border-bottom", border_signal)
        })
        .child(
            Row::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Height::exact_signal(height_signal))
                .s(Align::new().center_x())
                .s(Padding::new().x(16))
                .s(Gap::new().x(24))
                .update_raw_el(|raw_el| raw_el.style("transition", "height 0.2s ease"))
                .item(brand(palette))
                .item(
                    Row::new()
                        .s(Align::new().center_x())
                        .s(Gap::new().x(24))
                        .items(SECTIONS.into_iter().map(move |section| {
                            styled_link(palette, LinkStyle::Plain, section.label(), section.href(), false)
                        })),
                )
                .item(
                    Row::new()
                        .s(Align::new().right())
                        .s(Gap::new().x(8))
                        .item(magnetic(
                            0.10,
                            spring,
                            styled_link(palette, LinkStyle::Outline, "Resume", config.resume.path.clone(), true),
                        ))
                        .item(magnetic(
                            0.12,
                            spring,
                            styled_link(palette, LinkStyle::Solid, "GitHub", PROFILE.github.to_owned(), true),
                        ))
                        .item(theme_toggle(preset.theme, palette, app)),
                ),
        )
}

fn live_dot(palette: Palette, size: u32) -> impl Element {
    El::new()
        .s(Width::exact(size))
        .s(Height::exact(size))
        .s(RoundedCorners::all_max())
        .update_raw_el(move |raw_el| raw_el.style("background", palette.live_dot))
}

fn brand(palette: Palette) -> impl Element {
    Row::new()
        .s(Gap::new().x(8))
        .s(Align::new().center_y())
        .item(live_dot(palette, 8))
        .item(
            Link::new()
                .label(PROFILE.name)
                .to(SectionId::Home.href())
                .s(Font::new().weight(FontWeight::SemiBold))
                .update_raw_el(move |raw_el| raw_el.style("color", palette.text_strong)),
        )
}

fn theme_toggle(theme: Theme, palette: Palette, app: &PortfolioApp) -> impl Element + use<> {
    let theme_atom = app.theme.clone();
    let (icon, title) = match theme {
        Theme::Dark => ("☀", "Switch to light theme"),
        Theme::Light => ("☾", "Switch to dark theme"),
    };
    Button::new()
        .s(Width::exact(32))
        .s(Height::exact(32))
        .s(RoundedCorners::all_max())
        .s(Font::new().size(16))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("title", title)
                .attr("aria-label", title)
                .style("color", palette.text)
                .style("border", &format!("1px solid {}", palette.surface_border))
        })
        .label(icon)
        .on_press(move || theme_atom.update(|theme| theme.toggled()))
}

// ===== HERO =====

fn hero(preset: ThemePreset, config: &SiteConfig) -> impl Element + use<> {
    let palette = preset.palette;
    let motion = preset.motion;
    let stagger = |index: usize| index as f64 * motion.stagger_seconds;

    let intro = Column::new()
        .s(Width::fill().min(300))
        .s(Gap::new().y(24))
        .s(Align::new().center_y())
        .item(fade_up(motion.fade_up, stagger(0), availability_badge(palette)))
        .item(fade_up(
            motion.fade_up,
            stagger(1),
            Paragraph::new()
                .s(Font::new().size(56).weight(FontWeight::ExtraBold).line_height(64))
                .update_raw_el(move |raw_el| raw_el.style("color", palette.text_strong))
                .content(PROFILE.title),
        ))
        .item(fade_up(
            motion.fade_up,
            stagger(2),
            Paragraph::new()
                .s(Font::new().size(18))
                .s(Width::fill().max(560))
                .content(PROFILE.tagline),
        ))
        .item(fade_up(
            motion.fade_up,
            stagger(3),
            Row::new()
                .multiline()
                .s(Gap::both(12))
                .item(magnetic(
                    motion.magnetic_strength,
                    motion.magnetic_spring,
                    styled_link(palette, LinkStyle::Gradient, "View Projects", SectionId::Projects.href(), false),
                ))
                .item(magnetic(
                    motion.magnetic_strength,
                    motion.magnetic_spring,
                    styled_link(palette, LinkStyle::Outline, "Contact Me", SectionId::Contact.href(), false),
                )),
        ))
        .item(fade_up(motion.fade_up, stagger(4), contact_line(palette)));

    let orb = config.ui.show_orb.then(|| fade_up(motion.fade_up, stagger(5), orb_panel(palette)));

    El::new()
        .s(Width::fill().max(CONTENT_MAX_WIDTH))
        .s(Align::new().center_x())
        .s(Padding::new().x(16).top(80).bottom(112))
        .update_raw_el(|raw_el| raw_el.attr("id", SectionId::Home.anchor()))
        .child(
            Row::new()
                .multiline()
                .s(Width::fill())
                .s(Gap::both(48))
                .item(intro)
                .item(orb),
        )
}

fn availability_badge(palette: Palette) -> impl Element {
    Row::new()
        .s(Gap::new().x(8))
        .s(Padding::new().x(12).y(4))
        .s(RoundedCorners::all_max())
        .s(Font::new().size(12).weight(FontWeight::Medium))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("width", "fit-content")
                .style("color", palette.text_strong)
                .style("background", palette.chip_background)
                .style("border", &format!("1px solid {}", palette.surface_border))
        })
        .item(live_dot(palette, 6))
        .item(Text::new(PROFILE.availability))
}

fn contact_line(palette: Palette) -> impl Element {
    Row::new()
        .multiline()
        .s(Gap::both(16))
        .s(Font::new().size(14))
        .item(Text::new(PROFILE.location))
        .item(styled_link(palette, LinkStyle::Underlined, PROFILE.email, PROFILE.mailto(), false))
        .item(styled_link(palette, LinkStyle::Underlined, "LinkedIn", PROFILE.linkedin.to_owned(), true))
        .item(Text::new(PROFILE.phone))
}

fn orb_panel(palette: Palette) -> impl Element {
    Column::new()
        .s(Width::fill().min(300))
        .s(RoundedCorners::all(24))
        .s(Padding::all(12))
        .s(Gap::new().y(8))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("background", palette.surface)
                .style("border", &format!("1px solid {}", palette.surface_border))
                .style("backdrop-filter", "blur(12px)")
                .style("box-sizing", "border-box")
        })
        .item(tech_orb(&palette))
        .item(
            Paragraph::new()
                .s(Font::new().size(12))
                .update_raw_el(move |raw_el| raw_el.style("color", palette.text_muted))
                .content(ORB_CAPTION),
        )
}

// ===== CONTENT SECTIONS =====

fn about(preset: ThemePreset) -> impl Element {
    let palette = preset.palette;
    let motion = preset.motion;
    section(
        preset,
        SectionId::About,
        grid(
            320,
            ABOUT_CARDS.into_iter().map(move |about_card| {
                fade_up(
                    motion.fade_up,
                    0.0,
                    lift_card(
                        motion.card_lift_px,
                        motion.card_hover_spring,
                        card(
                            palette,
                            Column::new()
                                .s(Gap::new().y(8))
                                .item(card_title(palette, about_card.heading, 18))
                                .item(Paragraph::new().content(about_card.body)),
                        ),
                    ),
                )
            }),
        ),
    )
}

fn skill_card(preset: ThemePreset, group: SkillGroup) -> impl Element {
    let palette = preset.palette;
    let motion = preset.motion;
    fade_up(
        motion.fade_up,
        0.0,
        lift_card(
            motion.card_lift_px,
            motion.card_hover_spring,
            card(
                palette,
                Column::new()
                    .s(Gap::new().y(12))
                    .item(card_title(palette, group.group, 16))
                    .item(
                        Row::new()
                            .multiline()
                            .s(Gap::both(8))
                            .items(group.items.iter().map(move |item| chip(palette, *item))),
                    ),
            ),
        ),
    )
}

fn skills(preset: ThemePreset) -> impl Element {
    section(
        preset,
        SectionId::Skills,
        grid(260, SKILLS.into_iter().map(move |group| skill_card(preset, group))),
    )
}

fn project_card(preset: ThemePreset, index: usize, project: Project) -> impl Element {
    let palette = preset.palette;
    let motion = preset.motion;
    let fade = shared::FadeUp {
        duration_seconds: Project::reveal_duration(index),
        ..motion.fade_up
    };
    fade_up(
        fade,
        0.0,
        lift_card(
            motion.card_lift_px,
            motion.card_hover_spring,
            card(
                palette,
                Column::new()
                    .s(Gap::new().y(12))
                    .item(card_title(palette, project.title, 20))
                    .item(Paragraph::new().content(project.blurb))
                    .item(
                        Column::new()
                            .s(Gap::new().y(4))
                            .s(Padding::new().left(4))
                            .items(project.highlights.iter().map(|highlight| Text::new(format!("• {highlight}")))),
                    )
                    .item(
                        Row::new()
                            .multiline()
                            .s(Gap::both(8))
                            .items(project.stack.iter().map(move |tech| chip(palette, *tech))),
                    )
                    .item(
                        Row::new()
                            .s(Gap::new().x(12))
                            .s(Padding::new().top(4))
                            .item(styled_link(
                                palette,
                                LinkStyle::Outline,
                                "Live Demo",
                                project.links.demo_href().to_owned(),
                                false,
                            ))
                            .item(styled_link(
                                palette,
                                LinkStyle::Solid,
                                "View Code",
                                project.links.code_href().to_owned(),
                                true,
                            )),
                    ),
            ),
        ),
    )
}

fn projects(preset: ThemePreset) -> impl Element {
    section(
        preset,
        SectionId::Projects,
        grid(
            420,
            PROJECTS
                .into_iter()
                .enumerate()
                .map(move |(index, project)| project_card(preset, index, project)),
        ),
    )
}

fn stats_image(palette: Palette, url: String, description: &'static str) -> impl Element {
    Image::new()
        .url(url)
        .description(description)
        .s(Width::fill())
        .s(RoundedCorners::all(12))
        .update_raw_el(move |raw_el| raw_el.style("border", &format!("1px solid {}", palette.surface_border)))
}

fn github_stats(preset: ThemePreset, config: &SiteConfig) -> impl Element + use<> {
    let palette = preset.palette;
    let username = config.github.username.as_str();
    section(
        preset,
        SectionId::Github,
        fade_up(
            preset.motion.fade_up,
            0.0,
            card(
                palette,
                grid(
                    360,
                    [
                        stats_image(palette, github_stats_url(username), "GitHub Stats"),
                        stats_image(palette, github_top_languages_url(username), "Top Languages"),
                    ],
                ),
            ),
        ),
    )
}

fn blog_card(preset: ThemePreset, post: BlogPost) -> impl Element {
    let palette = preset.palette;
    let motion = preset.motion;
    fade_up(
        motion.fade_up,
        0.0,
        lift_card(
            motion.card_lift_px,
            motion.card_hover_spring,
            card(
                palette,
                Column::new()
                    .s(Gap::new().y(8))
                    .item(card_title(palette, post.title, 18))
                    .item(
                        Paragraph::new()
                            .s(Font::new().size(14))
                            .update_raw_el(move |raw_el| raw_el.style("color", palette.text_muted))
                            .content(post.date),
                    )
                    .item(Paragraph::new().content(post.summary))
                    .item(
                        El::new()
                            .s(Padding::new().x(12).y(6))
                            .s(RoundedCorners::all(12))
                            .s(Font::new().size(14))
                            .update_raw_el(move |raw_el| {
                                raw_el
                                    .attr("aria-disabled", "true")
                                    .style("width", "fit-content")
                                    .style("cursor", "not-allowed")
                                    .style("opacity", "0.7")
                                    .style("border", &format!("1px solid {}", palette.surface_border))
                            })
                            .child(Text::new("Coming soon")),
                    ),
            ),
        ),
    )
}

fn blog(preset: ThemePreset) -> impl Element {
    section(
        preset,
        SectionId::Blog,
        grid(280, BLOG_POSTS.into_iter().map(move |post| blog_card(preset, post))),
    )
}

fn contact(preset: ThemePreset, config: &SiteConfig) -> impl Element + use<> {
    let palette = preset.palette;
    let direct = Column::new()
        .s(Width::fill().min(280))
        .s(Gap::new().y(12))
        .item(card_title(palette, CONTACT_HEADING, 16))
        .item(Paragraph::new().content(CONTACT_BODY))
        .item(
            Column::new()
                .s(Gap::new().y(8))
                .item(styled_link(palette, LinkStyle::Underlined, PROFILE.email, PROFILE.mailto(), false))
                .item(styled_link(palette, LinkStyle::Underlined, "LinkedIn", PROFILE.linkedin.to_owned(), true))
                .item(styled_link(palette, LinkStyle::Underlined, "GitHub", PROFILE.github.to_owned(), true))
                .item(Text::new(PROFILE.phone)),
        )
        .item(
            El::new().s(Padding::new().top(12)).child(styled_link(
                palette,
                LinkStyle::Gradient,
                "Download Resume (PDF)",
                config.resume.path.clone(),
                true,
            )),
        );

    let form_placeholder = Column::new()
        .s(Width::fill().min(280))
        .s(Padding::all(24))
        .s(RoundedCorners::all(16))
        .s(Gap::new().y(8))
        .s(Font::new().size(14))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("border", &format!("1px dashed {}", palette.surface_border))
                .style("color", palette.text_muted)
        })
        .item(card_title(palette, "Form Placeholder", 14))
        .item(Paragraph::new().content(CONTACT_NOTE));

    section(
        preset,
        SectionId::Contact,
        fade_up(
            preset.motion.fade_up,
            0.0,
            card(
                palette,
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::both(24))
                    .item(direct)
                    .item(form_placeholder),
            ),
        ),
    )
}

// ===== FOOTER =====

fn footer(palette: Palette) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().y(40))
        .update_raw_el(move |raw_el| raw_el.style("border-top", &format!("1px solid {}", palette.surface_border)))
        .child(contained(
            Row::new()
                .multiline()
                .s(Width::fill())
                .s(Gap::both(16))
                .s(Font::new().size(14))
                .update_raw_el(move |raw_el| {
                    raw_el
                        .style("justify-content", "space-between")
                        .style("color", palette.text_muted)
                })
                .item(Paragraph::new().content(footer_copyright(current_year())))
                .item(
                    Row::new()
                        .multiline()
                        .s(Gap::both(16))
                        .items(SECTIONS.into_iter().map(move |section| {
                            styled_link(palette, LinkStyle::Plain, section.label(), section.href(), false)
                        })),
                ),
        ))
}
