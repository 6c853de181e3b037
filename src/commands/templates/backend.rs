//! Contents of the generated backend sources.
//!
//! Everything here is written verbatim into the scaffolded project; only the
//! default port is interpolated.

pub fn app_js() -> &'static str {
    r#"import express from "express";
import cors from "cors";

const app = express();

app.use(cors());
app.use(express.json());

app.get("/", (req, res) => {
  res.send("API is running...");
});

export default app;
"#
}

pub fn server_js(default_port: u16) -> String {
    format!(
        r#"import app from "./app.js";
import mongoose from "mongoose";
import dotenv from "dotenv";

dotenv.config();

const PORT = process.env.PORT || {default_port};

mongoose.connect(process.env.MONGO_URI)
  .then(() => {{
    console.log("MongoDB connected");

    app.listen(PORT, () => {{
      console.log(`Server is running on port ${{PORT}}`);
      console.log(`URL: http://localhost:${{PORT}}`);
      console.log("Ctrl + C to stop the server");
    }});
  }})
  .catch(err => {{
    console.error("DB connection failed:", err.message);
  }});
"#
    )
}

pub fn env_file(default_port: u16) -> String {
    format!("PORT={default_port}\nMONGO_URI=mongodb://localhost:27017/mydb\n")
}

pub fn sample_controller() -> &'static str {
    r#"export const sampleController = (req, res) => {
  res.json({ message: "Sample controller working" });
};
"#
}

pub fn sample_route() -> &'static str {
    r#"import { Router } from "express";
import { sampleController } from "../controllers/sample.controller.js";

const router = Router();

router.get("/sample", sampleController);

export default router;
"#
}
