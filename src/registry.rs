/// One feed the digest knows about. The registry is a fixed table compiled
/// into the binary; there is deliberately no runtime configuration for it.
#[derive(Debug, Clone)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// The built-in AI news feed table, in the order feeds are fetched.
///
/// Registry order matters downstream: when two items carry the same
/// publication time, the one from the earlier feed wins the tie.
pub fn default_registry() -> Vec<FeedSource> {
    vec![
        FeedSource::new("OpenAI News", "https://openai.com/news/rss.xml"),
        FeedSource::new("Google AI Blog", "https://ai.googleblog.com/feeds/posts/default"),
        FeedSource::new("Anthropic News", "https://www.anthropic.com/news/rss"),
        FeedSource::new("Hugging Face", "https://huggingface.co/blog/feed.xml"),
        FeedSource::new("LangChain", "https://blog.langchain.dev/rss/"),
        FeedSource::new("Weights & Biases", "https://wandb.ai/fully-connected/rss.xml"),
        FeedSource::new(
            "DeepLearning.AI (The Batch)",
            "https://www.deeplearning.ai/the-batch/feed/",
        ),
        FeedSource::new("Import AI (Jack Clark)", "https://jack-clark.net/feed/"),
        FeedSource::new("fast.ai", "https://www.fast.ai/index.xml"),
        FeedSource::new("Towards Data Science", "https://towardsdatascience.com/feed"),
        FeedSource::new(
            "TechCrunch AI",
            "https://techcrunch.com/tag/artificial-intelligence/feed/",
        ),
        FeedSource::new("VentureBeat AI", "https://venturebeat.com/category/ai/feed/"),
        FeedSource::new("NVIDIA Blog", "https://blogs.nvidia.com/feed/"),
        FeedSource::new(
            "InfoWorld AI",
            "https://www.infoworld.com/category/machine-learning/index.rss",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_not_empty() {
        assert!(!default_registry().is_empty());
    }

    #[test]
    fn test_registry_urls_are_http() {
        for source in default_registry() {
            assert!(
                source.url.starts_with("https://") || source.url.starts_with("http://"),
                "bad url for {}: {}",
                source.name,
                source.url
            );
        }
    }

    #[test]
    fn test_registry_order_is_stable() {
        let registry = default_registry();
        assert_eq!(registry[0].name, "OpenAI News");
        assert_eq!(registry.last().unwrap().name, "InfoWorld AI");
    }
}
