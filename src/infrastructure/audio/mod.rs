mod openai_speech_synthesizer;
mod openai_whisper_engine;

pub use openai_speech_synthesizer::OpenAiSpeechSynthesizer;
pub use openai_whisper_engine::OpenAiWhisperEngine;
