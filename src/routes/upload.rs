use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use futures::TryStreamExt;

use crate::error::{ApiError, AppError};
use crate::middleware::session::{CurrentSession, KnownSession};
use crate::models::notice::Notice;
use crate::models::upload::{TextToImageForm, TextToImageRequest, UploadedFile};
use crate::routes::html;
use crate::services::travel_service::TravelService;
use crate::services::validation::{
    validate_enhancement_prompt, validate_image, validate_photo_app, validate_text_prompt,
    ValidationError, MAX_UPLOAD_BYTES,
};
use crate::views::pages::{GalleryView, RecentUploadView, UploadView};
use crate::views::{self, Renderer};

/// Files and text fields of one multipart body.
#[derive(Debug, Default)]
struct MultipartForm {
    files: HashMap<String, UploadedFile>,
    fields: HashMap<String, String>,
}

impl MultipartForm {
    fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// Reads the whole body. File contents stop growing once past the upload
/// limit so the size check still fails without buffering everything.
async fn read_multipart(mut payload: Multipart) -> Result<MultipartForm, AppError> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?
        {
            if bytes.len() <= MAX_UPLOAD_BYTES {
                bytes.extend_from_slice(&chunk);
            }
        }

        match file_name {
            Some(file_name) => {
                form.files.insert(
                    name,
                    UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    },
                );
            }
            None => {
                form.fields
                    .insert(name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }

    Ok(form)
}

pub async fn upload_photo(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_multipart(payload).await?;
    let file = form
        .file("file")
        .or_else(|| form.file("photo"))
        .ok_or(ValidationError::NoFile)?;
    validate_image(file)?;

    let uploaded = match service.upload_photo(file).await {
        Ok(uploaded) => uploaded,
        Err(err) => {
            log::warn!("Upload of {} failed: {}", file.file_name, err);
            let notice = Notice::error(format!("Upload failed: {}", err.user_message()));
            return Ok(current.ok(views::notice_fragment(&notice)));
        }
    };

    let demo = uploaded.is_fallback();
    let photo_url = service.api().absolute_url(&uploaded.data);
    current
        .handle
        .lock()
        .await
        .record_upload(&photo_url, &file.file_name, Utc::now());

    let notice = if demo {
        Notice::warning("Backend server is not available. Using demo mode.")
    } else {
        Notice::success("Photo uploaded successfully!")
    };
    let view = UploadView {
        photo_url,
        file_name: file.file_name.clone(),
        demo,
    };
    let body = renderer.render_with_notice(views::UPLOAD_RESULT, &view, Some(&notice))?;
    Ok(current.ok(body))
}

/// The last upload, if it is less than a day old.
pub async fn recent_upload(
    renderer: web::Data<Renderer>,
    known: KnownSession,
) -> Result<HttpResponse, AppError> {
    let Some(handle) = known.0 else {
        return Ok(HttpResponse::NoContent().finish());
    };
    let session = handle.lock().await;
    match session.recent_upload(Utc::now()) {
        Some(record) => {
            let view = RecentUploadView::from(record);
            Ok(html(renderer.render(views::RECENT_UPLOAD, &view)?))
        }
        None => Ok(HttpResponse::NoContent().finish()),
    }
}

pub async fn clear_upload(known: KnownSession) -> HttpResponse {
    if let Some(handle) = known.0 {
        handle.lock().await.clear_upload();
    }
    html(views::notice_fragment(&Notice::success("Photo removed")))
}

pub async fn photo_app(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_multipart(payload).await?;
    let selfie = form.file("selfie");
    let prompt = validate_photo_app(selfie, form.text("prompt"))?;
    let selfie = selfie.ok_or(ValidationError::SelfieRequired)?;
    validate_image(selfie)?;

    match service.generate_photo_app_image(selfie, &prompt).await {
        Ok(urls) => {
            let view = GalleryView::from_urls("Your Generated Images", &urls, &prompt);
            let notice = Notice::success("Images generated successfully!");
            Ok(html(renderer.render_with_notice(views::GALLERY, &view, Some(&notice))?))
        }
        Err(err) => {
            log::warn!("Photo app generation failed: {}", err);
            let notice = Notice::error(format!("Image generation failed: {}", err.user_message()));
            Ok(html(views::notice_fragment(&notice)))
        }
    }
}

pub async fn text_to_image(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    form: web::Form<TextToImageForm>,
) -> Result<HttpResponse, AppError> {
    let (prompt, style) = validate_text_prompt(
        form.prompt.as_deref().unwrap_or_default(),
        form.style.as_deref(),
    )?;
    let request = TextToImageRequest { prompt, style };

    let generated = service.generate_text_to_image(&request).await.and_then(|response| {
        let url = response
            .image_url
            .ok_or_else(|| ApiError::Rejected("No image returned".to_string()))?;
        Ok((url, response.provider))
    });

    match generated {
        Ok((url, provider)) => {
            let caption = provider.unwrap_or_else(|| "AI".to_string());
            let view = GalleryView::from_urls(
                "Generated Image",
                &[service.api().absolute_url(&url)],
                &caption,
            );
            let notice = Notice::success(format!("Image generated successfully! ({})", caption));
            Ok(html(renderer.render_with_notice(views::GALLERY, &view, Some(&notice))?))
        }
        Err(err) => {
            log::warn!("Text to image failed: {}", err);
            let notice = Notice::error(format!("Failed to generate image: {}", err.user_message()));
            Ok(html(views::notice_fragment(&notice)))
        }
    }
}

pub async fn lightx(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_multipart(payload).await?;
    let prompt = validate_enhancement_prompt(form.text("prompt"))?;
    let image = form.file("image").ok_or(ValidationError::NoFile)?;
    validate_image(image)?;

    match service.generate_lightx_image(&prompt, image).await {
        Ok(images) => {
            let view = GalleryView::from_generated("Enhanced Images", &images);
            let notice = Notice::success("LightX enhancement completed successfully!");
            Ok(html(renderer.render_with_notice(views::GALLERY, &view, Some(&notice))?))
        }
        Err(err) => {
            log::warn!("LightX enhancement failed: {}", err);
            let notice = Notice::error(format!("Failed to enhance image: {}", err.user_message()));
            Ok(html(views::notice_fragment(&notice)))
        }
    }
}
