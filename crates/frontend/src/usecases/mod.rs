pub mod u501_remix_artifact;
