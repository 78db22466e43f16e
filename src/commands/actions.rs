//! `actions` subcommands: list, get, create, update, delete.

use anyhow::{Context, Result};
use reqwest::Method;

use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{ActionDetails, ActionListResponse, ActionRequest, ActionResponse};

/// Actions collection endpoint, relative to the API root
const ACTIONS_ENDPOINT: &str = "actions";

pub async fn list(config: &mut Config) -> Result<()> {
    let client = ApiClient::new()?;
    client.authenticate(config).await?;

    let response = client
        .request(config, Method::GET, ACTIONS_ENDPOINT, Vec::new())
        .await?;
    let response = ApiClient::check_response(response).await?;
    let list: ActionListResponse = response
        .json()
        .await
        .context("Failed to parse action list response")?;

    println!("{}", serde_json::to_string_pretty(&list.data)?);
    Ok(())
}

pub async fn get(config: &mut Config, id: &str) -> Result<()> {
    let client = ApiClient::new()?;
    client.authenticate(config).await?;

    let endpoint = format!("{}/{}", ACTIONS_ENDPOINT, id);
    let response = client
        .request(config, Method::GET, &endpoint, Vec::new())
        .await?;
    let response = ApiClient::check_response(response).await?;
    let action: ActionResponse = response
        .json()
        .await
        .context("Failed to parse action response")?;

    println!("{}", serde_json::to_string_pretty(&action.data)?);
    Ok(())
}

pub async fn create(config: &mut Config, details: ActionDetails) -> Result<()> {
    let client = ApiClient::new()?;
    client.authenticate(config).await?;

    let payload = serde_json::to_vec(&ActionRequest {
        custom_action: details,
    })?;
    let response = client
        .request(config, Method::POST, ACTIONS_ENDPOINT, payload)
        .await?;
    let response = ApiClient::check_response(response).await?;
    let action: ActionResponse = response
        .json()
        .await
        .context("Failed to parse action response")?;

    println!("{}", serde_json::to_string_pretty(&action.data)?);
    Ok(())
}

pub async fn update(config: &mut Config, id: &str, details: ActionDetails) -> Result<()> {
    let client = ApiClient::new()?;
    client.authenticate(config).await?;

    let payload = serde_json::to_vec(&ActionRequest {
        custom_action: details,
    })?;
    let endpoint = format!("{}/{}", ACTIONS_ENDPOINT, id);
    let response = client
        .request(config, Method::PATCH, &endpoint, payload)
        .await?;
    let response = ApiClient::check_response(response).await?;
    let action: ActionResponse = response
        .json()
        .await
        .context("Failed to parse action response")?;

    println!("{}", serde_json::to_string_pretty(&action.data)?);
    Ok(())
}

pub async fn delete(config: &mut Config, id: &str) -> Result<()> {
    let client = ApiClient::new()?;
    client.authenticate(config).await?;

    let endpoint = format!("{}/{}", ACTIONS_ENDPOINT, id);
    let response = client
        .request(config, Method::DELETE, &endpoint, Vec::new())
        .await?;
    ApiClient::check_response(response).await?;

    println!("Deleted action {}", id);
    Ok(())
}
