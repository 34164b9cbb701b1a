use crate::components::daisy_ui::{Card, Rating};
use crate::i18n::{t, tr1, use_lang};
use ucshop_core::REVIEWS;
use yew::prelude::*;

#[function_component(ReviewsSection)]
pub fn reviews_section() -> Html {
    let lang = use_lang();
    html! {
        <section id="reviews" class="section section--alt" aria-labelledby="reviews-title" lang={lang}>
            <h2 id="reviews-title" class="section__title">{ t("reviews.title") }</h2>
            <div class="reviews-grid">
                { for REVIEWS.iter().map(|review| {
                    let initial = review.initial().map(String::from).unwrap_or_default();
                    html! {
                        <Card key={review.id} class="review">
                            <div class="review__head">
                                <span class="avatar placeholder" aria-hidden="true">{ initial }</span>
                                <div>
                                    <p class="font-bold">{ review.name }</p>
                                    <Rating
                                        value={review.rating}
                                        label={tr1("reviews.rating", "rating", &review.rating.to_string())}
                                    />
                                </div>
                            </div>
                            <p class="review__text">{ review.text }</p>
                        </Card>
                    }
                }) }
            </div>
        </section>
    }
}
