//! Per-type object content rendering.
//!
//! Renders what sits inside an object's interactive wrapper: the image,
//! the styled text block, the YouTube tile with its play affordance, or
//! the video tile. Hit handling and positioning live in `CanvasHost`.

use canvas::object::{CanvasObject, ObjectType};
use leptos::prelude::*;

use crate::util::youtube::extract_youtube_id;

/// Thumbnail URL for a YouTube video id.
fn youtube_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

/// Content of a single canvas object.
#[component]
pub fn ObjectContent(object: CanvasObject) -> impl IntoView {
    match object.object_type {
        ObjectType::Image => view! {
            <img
                class="object-content object-content--image"
                src=object.content_url.clone()
                draggable="false"
            />
        }
        .into_any(),
        ObjectType::Text => {
            let style = format!(
                "font-size: {}px; font-weight: {}; color: {};",
                object.font_size.unwrap_or(16),
                object.font_weight.clone().unwrap_or_else(|| "normal".to_owned()),
                object.text_color.clone().unwrap_or_else(|| "#333333".to_owned()),
            );
            view! {
                <div class="object-content object-content--text" style=style>
                    {object.content_url.clone()}
                </div>
            }
            .into_any()
        }
        ObjectType::Youtube => {
            let thumbnail = extract_youtube_id(&object.content_url).map(|id| youtube_thumbnail(&id));
            view! {
                <div class="object-content object-content--youtube">
                    {thumbnail.map(|url| {
                        view! { <img class="object-content__thumb" src=url draggable="false"/> }
                    })}
                    <span class="object-content__play">"\u{25B6}"</span>
                </div>
            }
            .into_any()
        }
        ObjectType::Video => view! {
            <div class="object-content object-content--video">
                <span class="object-content__play">"\u{25B6}"</span>
            </div>
        }
        .into_any(),
    }
}
