use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::info;

use menu::bank::MenuSource;
use menu::forms::{validate_comment, validate_feedback};
use menu::model::{Dish, Feedback, Leader, Promotion};
use menu::navigation::{Neighbors, resolve};

use crate::error::AppError;
use crate::state::State as AppState;

#[derive(Deserialize)]
#[serde(default)]
pub struct CommentPayload {
    author: String,
    comment: String,
    rating: u8,
}

impl Default for CommentPayload {
    fn default() -> Self {
        Self {
            author: String::new(),
            comment: String::new(),
            rating: 5,
        }
    }
}

pub async fn dishes_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Dish>> {
    Json(state.bank.read().await.dishes().to_vec())
}

pub async fn dish_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Dish>, AppError> {
    let bank = state.bank.read().await;

    let dish = bank
        .dish(&id)
        .ok_or_else(|| AppError::NotFound(format!("dish {id}")))?;

    Ok(Json(dish.clone()))
}

pub async fn featured_dish_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dish>, AppError> {
    let bank = state.bank.read().await;

    let dish = bank
        .featured_dish()
        .ok_or_else(|| AppError::NotFound("featured dish".to_string()))?;

    Ok(Json(dish.clone()))
}

pub async fn neighbors_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Neighbors>, AppError> {
    let bank = state.bank.read().await;

    Ok(Json(resolve(&bank.dish_ids(), &id)?))
}

pub async fn promotions_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Promotion>> {
    Json(state.bank.read().await.promotions().to_vec())
}

pub async fn promotion_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Promotion>, AppError> {
    let bank = state.bank.read().await;

    let promotion = bank
        .promotion(&id)
        .ok_or_else(|| AppError::NotFound(format!("promotion {id}")))?;

    Ok(Json(promotion.clone()))
}

pub async fn featured_promotion_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Promotion>, AppError> {
    let bank = state.bank.read().await;

    let promotion = bank
        .featured_promotion()
        .ok_or_else(|| AppError::NotFound("featured promotion".to_string()))?;

    Ok(Json(promotion.clone()))
}

pub async fn leaders_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Leader>> {
    Json(state.bank.read().await.leaders().to_vec())
}

pub async fn featured_leader_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Leader>, AppError> {
    let bank = state.bank.read().await;

    let leader = bank
        .featured_leader()
        .ok_or_else(|| AppError::NotFound("featured leader".to_string()))?;

    Ok(Json(leader.clone()))
}

pub async fn comments_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<CommentPayload>,
) -> Result<Json<Dish>, AppError> {
    let comment =
        validate_comment(&payload.author, &payload.comment, payload.rating).map_err(AppError::Invalid)?;

    let mut bank = state.bank.write().await;

    let dish = bank
        .add_comment(&id, comment)
        .ok_or_else(|| AppError::NotFound(format!("dish {id}")))?;

    info!("Comment added to {id}");

    Ok(Json(dish.clone()))
}

pub async fn feedback_handler(
    Json(payload): Json<Feedback>,
) -> Result<Json<Feedback>, AppError> {
    let feedback = validate_feedback(payload).map_err(AppError::Invalid)?;

    info!("Feedback received from {}", feedback.firstname);

    Ok(Json(feedback))
}

#[cfg(test)]
mod tests {
    use menu::bank::Bank;
    use tokio::sync::RwLock;

    use crate::config::Config;

    use super::*;

    fn seeded_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Config {
                port: 0,
                bank_path: None,
            },
            bank: RwLock::new(Bank::seeded()),
        })
    }

    #[tokio::test]
    async fn dish_lookup_round_trips() {
        let state = seeded_state();

        let Json(dish) = dish_handler(State(state), Path("vadonut".to_string()))
            .await
            .unwrap();

        assert_eq!(dish.name, "Vadonut");
    }

    #[tokio::test]
    async fn unknown_dish_is_not_found() {
        let state = seeded_state();

        let error = dish_handler(State(state), Path("croissant".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn neighbors_wrap_around_the_menu() {
        let state = seeded_state();

        let Json(first) = neighbors_handler(State(state.clone()), Path("uthappizza".to_string()))
            .await
            .unwrap();
        assert_eq!(first.prev, "elaicheesecake");
        assert_eq!(first.next, "zucchipakoda");

        let Json(last) = neighbors_handler(State(state), Path("elaicheesecake".to_string()))
            .await
            .unwrap();
        assert_eq!(last.prev, "vadonut");
        assert_eq!(last.next, "uthappizza");
    }

    #[tokio::test]
    async fn neighbors_of_unknown_dish_is_not_found() {
        let state = seeded_state();

        let error = neighbors_handler(State(state), Path("croissant".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn promotion_lookup_round_trips() {
        let state = seeded_state();

        let Json(promotion) =
            promotion_handler(State(state.clone()), Path("weekendgrandbuffet".to_string()))
                .await
                .unwrap();
        assert_eq!(promotion.name, "Weekend Grand Buffet");

        let error = promotion_handler(State(state), Path("happyhour".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn valid_comment_lands_on_the_dish() {
        let state = seeded_state();

        let payload = CommentPayload {
            author: "Paul McVites".to_string(),
            comment: "Sends anyone to heaven!".to_string(),
            rating: 4,
        };

        let Json(dish) = comments_handler(
            State(state.clone()),
            Path("uthappizza".to_string()),
            Json(payload),
        )
        .await
        .unwrap();

        assert_eq!(dish.comments.len(), 6);
        assert_eq!(dish.comments.last().unwrap().rating, 4);

        // The mutation persists in the shared bank.
        let bank = state.bank.read().await;
        assert_eq!(bank.dish("uthappizza").unwrap().comments.len(), 6);
    }

    #[tokio::test]
    async fn invalid_comment_returns_the_error_map() {
        let state = seeded_state();

        let payload = CommentPayload {
            author: String::new(),
            comment: String::new(),
            rating: 5,
        };

        let error = comments_handler(State(state), Path("uthappizza".to_string()), Json(payload))
            .await
            .unwrap_err();

        let AppError::Invalid(errors) = error else {
            panic!("expected a validation error");
        };
        assert_eq!(errors["author"], "Author is required.");
        assert_eq!(errors["comment"], "Comment is required.");
    }

    #[tokio::test]
    async fn comment_on_unknown_dish_is_not_found() {
        let state = seeded_state();

        let payload = CommentPayload {
            author: "John Lemon".to_string(),
            comment: "Imagine!".to_string(),
            rating: 5,
        };

        let error = comments_handler(State(state), Path("croissant".to_string()), Json(payload))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn feedback_is_validated_and_echoed() {
        let feedback = Feedback {
            firstname: "John".to_string(),
            lastname: "Lemon".to_string(),
            telnum: "5551234".to_string(),
            email: "john@lemon.org".to_string(),
            agree: true,
            contacttype: "Email".to_string(),
            message: "Imagine all the eatables.".to_string(),
        };

        let Json(echoed) = feedback_handler(Json(feedback.clone())).await.unwrap();
        assert_eq!(echoed, feedback);

        let empty = feedback_handler(Json(Feedback::default())).await.unwrap_err();
        let AppError::Invalid(errors) = empty else {
            panic!("expected a validation error");
        };
        assert_eq!(errors["firstname"], "First name is required.");
        assert_eq!(errors["email"], "Email is required.");
    }
}
