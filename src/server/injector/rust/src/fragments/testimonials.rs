/* src/server/injector/rust/src/fragments/testimonials.rs */

use crate::block::{BlockKind, locked};
use crate::helpers::escape_html;
use crate::model::Testimonial;

const TESTIMONIALS_EMPTY: &str = concat!(
  r#"<div class="sf-testimonials-empty" data-empty="testimonials">"#,
  "<p>No testimonials yet.</p></div>",
);

const MAX_STARS: f64 = 5.0;

pub fn generate_testimonials_html(testimonials: &[Testimonial]) -> String {
  if testimonials.is_empty() {
    return TESTIMONIALS_EMPTY.to_string();
  }
  let mut out = format!(r#"<div class="sf-testimonials" {}>"#, locked(BlockKind::Testimonials));
  for testimonial in testimonials {
    out.push_str(&testimonial_card(testimonial));
  }
  out.push_str("</div>");
  out
}

fn testimonial_card(testimonial: &Testimonial) -> String {
  let name = testimonial.name.as_deref().filter(|s| !s.is_empty()).unwrap_or("Anonymous");
  let mut card = String::from(r#"<div class="sf-testimonial">"#);
  if let Some(avatar) = testimonial.avatar.as_deref().filter(|s| !s.is_empty()) {
    card.push_str(&format!(
      r#"<img src="{}" alt="{}" class="sf-testimonial-avatar" loading="lazy">"#,
      escape_html(avatar),
      escape_html(name)
    ));
  }
  card.push_str(&format!(
    r#"<blockquote class="sf-testimonial-text">{}</blockquote>"#,
    testimonial.quote()
  ));
  if let Some(stars) = star_count(testimonial.rating) {
    card.push_str(&format!(
      r#"<div class="sf-testimonial-rating" aria-label="{stars} out of 5 stars">{}</div>"#,
      "★".repeat(stars)
    ));
  }
  card.push_str(&format!(r#"<p class="sf-testimonial-author">{name}</p>"#));
  if let Some(role) = testimonial.role.as_deref().filter(|s| !s.is_empty()) {
    card.push_str(&format!(r#"<p class="sf-testimonial-role">{role}</p>"#));
  }
  card.push_str("</div>");
  card
}

fn star_count(rating: Option<f64>) -> Option<usize> {
  let rating = rating?;
  if !rating.is_finite() || rating < 1.0 {
    return None;
  }
  Some(rating.round().min(MAX_STARS) as usize)
}
