use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::errors::ApiError;
use crate::core::metrics;
use crate::core::state::AppState;
use crate::routing::{PageHandler, RouteTable, UnknownRouteName};
use crate::schemas::{NavLink, PageResponse, PageSection};

/// Navigation shown on every page, in display order. Paths come from the
/// route table at render time, never from literals here.
const NAV_PAGES: &[(&str, &str)] = &[
    ("Home", "home"),
    ("AI Tools", "aitools"),
    ("Blogs", "blogs"),
    ("Videos", "videos"),
    ("Resources", "resources"),
    ("IELTS Module", "ielts_module"),
    ("Contact", "contact"),
    ("Sign In", "auth"),
];

/// Router fallback: every request that is not an operational endpoint goes
/// through the route table. Misses surface as 404 to the client.
pub(crate) async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::MethodNotAllowed("Pages only serve GET requests"));
    }

    let handler = state
        .routes()
        .resolve(uri.path())
        .map_err(|err| ApiError::NotFound(err.to_string()))?;

    metrics::record_page_view(page_name(handler));

    let page = render(handler, &state)?;
    Ok(Json(page).into_response())
}

fn page_name(handler: PageHandler) -> &'static str {
    match handler {
        PageHandler::Home => "home",
        PageHandler::Blogs => "blogs",
        PageHandler::Videos => "videos",
        PageHandler::Resources => "resources",
        PageHandler::IeltsModule => "ielts_module",
        PageHandler::Contact => "contact",
        PageHandler::AuthPage => "auth",
    }
}

fn render(handler: PageHandler, state: &AppState) -> Result<PageResponse, ApiError> {
    let nav = nav_links(state.routes())
        .map_err(|err| ApiError::internal(err, "Navigation references an unregistered route"))?;

    let page = match handler {
        PageHandler::Home => home(state, nav),
        PageHandler::Blogs => blogs(nav),
        PageHandler::Videos => videos(nav),
        PageHandler::Resources => resources(nav),
        PageHandler::IeltsModule => ielts_module(nav),
        PageHandler::Contact => contact(nav),
        PageHandler::AuthPage => auth_page(nav),
    };

    Ok(page)
}

fn nav_links(routes: &RouteTable) -> Result<Vec<NavLink>, UnknownRouteName> {
    NAV_PAGES
        .iter()
        .map(|(label, name)| {
            let pattern = routes.reverse(name)?;
            Ok(NavLink {
                name: name.to_string(),
                label: label.to_string(),
                path: format!("/{pattern}"),
            })
        })
        .collect()
}

fn home(state: &AppState, nav: Vec<NavLink>) -> PageResponse {
    PageResponse {
        page: "home".to_string(),
        title: state.settings().api().project_name.clone(),
        tagline: "Everything you need to prepare for the IELTS exam in one place".to_string(),
        sections: vec![
            PageSection {
                heading: "Practice every module".to_string(),
                body: "Reading, writing, listening and speaking practice built around real exam \
                       formats."
                    .to_string(),
            },
            PageSection {
                heading: "Learn at your own pace".to_string(),
                body: "Guides, videos and downloadable resources for every band target."
                    .to_string(),
            },
        ],
        nav,
    }
}

fn blogs(nav: Vec<NavLink>) -> PageResponse {
    PageResponse {
        page: "blogs".to_string(),
        title: "Blogs & AI Tools".to_string(),
        tagline: "Preparation guides and AI-assisted study tools".to_string(),
        sections: vec![
            PageSection {
                heading: "Preparation guides".to_string(),
                body: "Strategy articles for each IELTS module, from band descriptors to time \
                       management."
                    .to_string(),
            },
            PageSection {
                heading: "AI study tools".to_string(),
                body: "Automated writing feedback and speaking practice prompts.".to_string(),
            },
        ],
        nav,
    }
}

fn videos(nav: Vec<NavLink>) -> PageResponse {
    PageResponse {
        page: "videos".to_string(),
        title: "Video Lessons".to_string(),
        tagline: "Watch walkthroughs of real test questions".to_string(),
        sections: vec![PageSection {
            heading: "Lesson library".to_string(),
            body: "Recorded lessons covering listening sections, reading passages and writing \
                   tasks."
                .to_string(),
        }],
        nav,
    }
}

fn resources(nav: Vec<NavLink>) -> PageResponse {
    PageResponse {
        page: "resources".to_string(),
        title: "Study Resources".to_string(),
        tagline: "Downloadable material for self-study".to_string(),
        sections: vec![PageSection {
            heading: "Downloads".to_string(),
            body: "Band descriptors, sample answers, vocabulary lists and practice tests."
                .to_string(),
        }],
        nav,
    }
}

fn ielts_module(nav: Vec<NavLink>) -> PageResponse {
    PageResponse {
        page: "ielts_module".to_string(),
        title: "IELTS Module".to_string(),
        tagline: "Structured preparation for all four modules".to_string(),
        sections: vec![
            PageSection {
                heading: "Reading".to_string(),
                body: "Three passages with increasing difficulty and timed practice.".to_string(),
            },
            PageSection {
                heading: "Writing".to_string(),
                body: "Task 1 and Task 2 with model answers.".to_string(),
            },
            PageSection {
                heading: "Listening".to_string(),
                body: "Four sections with audio transcripts.".to_string(),
            },
            PageSection {
                heading: "Speaking".to_string(),
                body: "Part 1 to Part 3 cue cards and sample responses.".to_string(),
            },
        ],
        nav,
    }
}

fn contact(nav: Vec<NavLink>) -> PageResponse {
    PageResponse {
        page: "contact".to_string(),
        title: "Contact Us".to_string(),
        tagline: "Questions about your preparation? Get in touch".to_string(),
        sections: vec![PageSection {
            heading: "Reach the team".to_string(),
            body: "Send feedback or ask about courses and we will get back to you.".to_string(),
        }],
        nav,
    }
}

fn auth_page(nav: Vec<NavLink>) -> PageResponse {
    PageResponse {
        page: "auth".to_string(),
        title: "Sign In".to_string(),
        tagline: "Access your study progress".to_string(),
        sections: vec![PageSection {
            heading: "Your account".to_string(),
            body: "Sign in or create an account to track scores and saved material.".to_string(),
        }],
        nav,
    }
}
