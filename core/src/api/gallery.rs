//! Photo gallery.
use super::client::ApiClient;
use super::transport::{FilePart, FormField, Request, Transport};
use crate::records::{newest_first, GalleryImage};
use crate::system::Credentials;
use crate::Result;

impl<T> ApiClient<T>
where
    T: Transport,
{
    /// Images, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn gallery(&self) -> Result<Vec<GalleryImage>> {
        let mut images: Vec<GalleryImage> = self.fetch(Request::get("/api/gallery")).await?;
        newest_first(&mut images);
        Ok(images)
    }

    #[tracing::instrument(skip(self, credentials, image))]
    pub async fn upload_image(
        &self,
        credentials: &Credentials,
        caption: &str,
        image: FilePart,
    ) -> Result {
        let request = Request::post("/api/gallery")
            .bearer(credentials.token())
            .multipart(vec![
                FormField::Text {
                    name: "caption".to_string(),
                    value: caption.to_string(),
                },
                FormField::File {
                    name: "image".to_string(),
                    file: image,
                },
            ]);

        self.submit(request).await
    }
}
