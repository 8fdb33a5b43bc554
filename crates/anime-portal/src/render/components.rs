use super::escape;
use crate::binder::{
    CardView, DetailsView, ErrorPanel, GenreTags, PlatformButton, RankedEntry, SearchResultsView,
    SlideView, TrailerView,
};
use crate::interactions::FormMessage;
use crate::pages::DetailsOutcome;

fn join<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items.iter().map(render).collect::<Vec<_>>().join("\n")
}

fn action_links(card: &CardView, class: Option<&str>) -> String {
    let class = class
        .map(|c| format!(" class=\"{}\"", c))
        .unwrap_or_default();
    join(&card.actions, |action| {
        format!(
            "<a{} href=\"{}\">{}</a>",
            class,
            escape(&action.href),
            escape(action.label)
        )
    })
}

pub fn slides(slides: &[SlideView]) -> String {
    slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            format!(
                "<div class=\"slide{}\"><img src=\"{}\" alt=\"{}\"><div class=\"caption\"><h3>{}</h3><p>{}</p></div></div>",
                if index == 0 { " active" } else { "" },
                escape(&slide.image),
                escape(&slide.title),
                escape(&slide.title),
                escape(&slide.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn latest_updates(cards: &[CardView]) -> String {
    join(cards, |card| {
        format!(
            "<div class=\"card\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3><p>{}</p>{}</div>",
            escape(&card.image.src),
            escape(&card.image.alt),
            escape(&card.title),
            escape(&card.year),
            action_links(card, None)
        )
    })
}

pub fn top_rated(entries: &[RankedEntry]) -> String {
    join(entries, |entry| {
        format!(
            "<li><span class=\"rank\">{}.</span> {}</li>",
            entry.rank,
            escape(&entry.title)
        )
    })
}

pub fn show_grid(cards: &[CardView]) -> String {
    join(cards, |card| {
        format!(
            "<div class=\"show-card\"><img src=\"{}\" alt=\"{}\"><h3>{} ({})</h3><p>{}</p><p>{}</p><p>{}</p>{}</div>",
            escape(&card.image.src),
            escape(&card.image.alt),
            escape(&card.title),
            escape(&card.year),
            escape(&card.genres),
            escape(&card.score),
            escape(&card.synopsis),
            action_links(card, None)
        )
    })
}

pub fn movie_grid(cards: &[CardView]) -> String {
    join(cards, |card| {
        format!(
            "<div class=\"movie-card\"><img src=\"{}\" alt=\"{}\"><div class=\"movie-info\">\
             <h3>{} ({})</h3><p class=\"genre\">{}</p><p class=\"year\">⭐ {}</p>\
             <p class=\"synopsis\">{}</p><div class=\"watch-buttons\">{}</div></div></div>",
            escape(&card.image.src),
            escape(&card.image.alt),
            escape(&card.title),
            escape(&card.year),
            escape(&card.genres),
            escape(&card.score),
            escape(&card.synopsis),
            action_links(card, Some("watch-btn"))
        )
    })
}

pub fn search_results(results: &SearchResultsView) -> String {
    let grid = match results.empty_message {
        Some(message) => format!("<p>{}</p>", escape(message)),
        None => join(&results.cards, |card| {
            format!(
                "<div class=\"card\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3><p>⭐ {}</p><p>Episodes: {}</p>{}</div>",
                escape(&card.image.src),
                escape(&card.image.alt),
                escape(&card.title),
                escape(&card.score),
                escape(&card.episodes),
                action_links(card, None)
            )
        }),
    };

    format!(
        "<section id=\"search-results\" style=\"display: block\">\n<div class=\"grid\">\n{}\n</div>\n</section>",
        grid
    )
}

fn genres(tags: &GenreTags) -> String {
    match tags {
        GenreTags::Tags { names } => join(names, |name| format!("<span>{}</span>", escape(name))),
        GenreTags::Empty { message } => format!("<span>{}</span>", escape(message)),
    }
}

fn trailer(view: &TrailerView) -> String {
    match view {
        TrailerView::Embed { src, title, allow } => format!(
            "<iframe src=\"{}\" title=\"{}\" allow=\"{}\" allowfullscreen></iframe>",
            escape(src),
            escape(title),
            escape(allow)
        ),
        TrailerView::Placeholder { image, message } => format!(
            "<div class=\"no-trailer\"><img src=\"{}\" alt=\"No Trailer Available\"><p>{}</p></div>",
            escape(image),
            escape(message)
        ),
    }
}

fn platform(button: &PlatformButton) -> String {
    format!(
        "<a href=\"{}\" class=\"platform-btn {}\" target=\"_blank\"><img src=\"{}\" alt=\"{}\" class=\"platform-icon\">{}</a>",
        escape(&button.href),
        button.style.css_class(),
        escape(&button.icon),
        escape(&button.icon_alt),
        escape(&button.name)
    )
}

fn details(view: &DetailsView) -> String {
    let meta = join(&view.meta, |field| {
        format!(
            "<p><strong>{}:</strong> <span id=\"{}\">{}</span></p>",
            field.label,
            field.element_id,
            escape(&field.value)
        )
    });

    format!(
        "<div class=\"anime-details-container\">\n\
         <h1 id=\"anime-title\">{}</h1>\n\
         <img id=\"anime-poster\" src=\"{}\" alt=\"{}\">\n\
         <div class=\"anime-meta\">\n{}\n</div>\n\
         <div id=\"anime-genres\">{}</div>\n\
         <p id=\"anime-synopsis\">{}</p>\n\
         <div id=\"trailerBox\">{}</div>\n\
         <div class=\"platforms-list\">\n{}\n</div>\n\
         <a id=\"watch-external\" href=\"{}\" target=\"_blank\">Watch on MyAnimeList</a>\n\
         </div>",
        escape(&view.title),
        escape(&view.poster.src),
        escape(&view.poster.alt),
        meta,
        genres(&view.genres),
        escape(&view.synopsis),
        trailer(&view.trailer),
        join(&view.platforms, platform),
        escape(&view.external_url)
    )
}

fn error_panel(panel: &ErrorPanel) -> String {
    format!(
        "<div class=\"anime-details-container\">\n<div class=\"error-message\"><h3>{}</h3>\
         <a class=\"back-home\" href=\"{}\">Back to Home</a></div>\n</div>",
        escape(&panel.message),
        escape(&panel.back_href)
    )
}

pub fn details_outcome(outcome: &DetailsOutcome) -> String {
    match outcome {
        DetailsOutcome::Loaded(view) => details(view),
        DetailsOutcome::Failed(panel) => error_panel(panel),
    }
}

pub fn form_message(message: &FormMessage) -> String {
    let class = match message.kind {
        crate::interactions::MessageKind::Error => "error",
        crate::interactions::MessageKind::Success => "success",
    };
    format!(
        "<div id=\"formMessage\" style=\"display: block\"><p class=\"{}\">{}</p></div>",
        class,
        escape(&message.text)
    )
}
