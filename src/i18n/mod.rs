/*!
 * Localized string resolution.
 *
 * - `key`: typed (key, language, context) address
 * - `resolver`: fallback chain over an injected `TranslationSource`
 * - `cache`: optional memoizing decorator with explicit invalidation
 */

pub mod cache;
pub mod key;
pub mod resolver;

pub use cache::{CacheStats, CachedTranslations};
pub use key::TranslationKey;
pub use resolver::{
    DEFAULT_FALLBACK_CONTEXT, DEFAULT_LANGUAGE, Resolution, ResolutionSource, TranslationResolver,
    interpolate,
};
