use super::*;

impl ApiClient {
    pub async fn topics_by_file(&self, file_path: &str) -> Result<Vec<Topic>, ApiError> {
        let ctx = ErrorContext::new("fetch topics of file", "file", file_path);
        let req = self.request(Method::GET, &format!("/topics/{}", encode_path(file_path)))?;
        self.send_json(req, &ctx).await
    }

    pub async fn topic_names(&self) -> Result<Vec<TopicName>, ApiError> {
        let ctx = ErrorContext::new("fetch topic names", "topic names", "");
        let req = self.request(Method::GET, "/topics-names")?;
        self.send_json(req, &ctx).await
    }

    pub async fn create_topic_name(&self, name: &str) -> Result<TopicName, ApiError> {
        let ctx = ErrorContext::new("create topic name", "topic name", name).fields("the topic name");
        let req = self
            .request(Method::POST, "/topics-names/create/")?
            .json(&TopicName { name: name.to_string() });
        self.send_json(req, &ctx).await
    }

    pub async fn delete_topic_name(&self, name: &str) -> Result<(), ApiError> {
        let ctx = ErrorContext::new("delete topic name", "topic name", name);
        let req = self.request(Method::DELETE, &format!("/topics-names/{}", encode_name(name)))?;
        self.send_empty(req, &ctx).await
    }
}
